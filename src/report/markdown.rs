/// Render `rows` as a centred Markdown table. The first row is the header.
/// The table is surrounded by blank lines so it can be appended to a document.
pub fn markdown_table(rows: &[Vec<String>]) -> String {
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let mut out = String::from("\n");
    out.push_str(&format!("| {} |\n", header.join(" | ")));
    out.push_str(&format!("| {} |\n", vec![":-:"; header.len()].join(" | ")));
    for row in body {
        out.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    out.push('\n');
    out
}

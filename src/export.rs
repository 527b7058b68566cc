// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use serde_json::json;

use crate::ast::{Document, Key, Scalar, Value};
use crate::options::ParseOptions;
use crate::ScriptError;

/// Export a parsed script to pretty-printed JSON.
///
/// Conversion rules:
/// - Integers, floats and booleans map directly
/// - Dates become `"year.month.day"` strings
/// - Strings keep their source text, quotes included when they had them
/// - Arrays become JSON arrays
/// - Objects, and the document itself, become arrays of
///   `{"key": .., "value": ..}` entries so repeated keys and order survive
///
/// # Examples
/// ```no_run
/// use pdx_script::{export, parse_str};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = parse_str("potential = { tag = FRA }")?;
/// println!("{}", export::export_document_to_json(&doc)?);
/// # Ok(())
/// # }
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, ScriptError> {
    fn scalar_to_json(s: &Scalar) -> serde_json::Value {
        match s {
            Scalar::Integer(n) => json!(n),
            Scalar::Float(f) => json!(f),
            Scalar::Bool(b) => json!(b),
            Scalar::Date(d) => json!(d.to_string()),
            Scalar::String(s) => json!(s),
        }
    }

    fn key_to_json(k: &Key) -> serde_json::Value {
        match k {
            Key::String(s) => json!(s),
            Key::Integer(n) => json!(n),
        }
    }

    fn value_to_json(v: &Value) -> serde_json::Value {
        match v {
            Value::Scalar(s) => scalar_to_json(s),
            Value::Array(arr) => json!(arr.iter().map(value_to_json).collect::<Vec<_>>()),
            Value::Object(items) => pairs_to_json(items),
        }
    }

    fn pairs_to_json(items: &[(Key, Value)]) -> serde_json::Value {
        let out: Vec<serde_json::Value> = items
            .iter()
            .map(|(k, v)| {
                json!({
                    "key": key_to_json(k),
                    "value": value_to_json(v)
                })
            })
            .collect();
        serde_json::Value::Array(out)
    }

    serde_json::to_string_pretty(&pairs_to_json(&doc.pairs)).map_err(|e| ScriptError::TypeError {
        message: format!("Failed to serialize document: {}", e),
        path: String::new(),
        hint: None,
        code: Some(500),
    })
}

/// Read, parse and export a script file in one call.
///
/// # Errors
/// Returns an error if the file can't be read or doesn't parse.
pub fn export_script_file<P: AsRef<Path>>(path: P) -> Result<String, ScriptError> {
    let doc = crate::batch::parse_file(path.as_ref(), &ParseOptions::default())?;
    export_document_to_json(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use std::fs;

    #[test]
    fn test_export_keeps_duplicates_and_order() {
        let doc = parse_str(
            r#"
            potential = {
                tag = FRA
                tag = BUR
                NOT = { has_country_flag = formed }
            }
            "#,
        )
        .expect("Failed to parse");

        let json_output = export_document_to_json(&doc).expect("Failed to export document to JSON");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert!(v.is_array());
        assert_eq!(v[0]["key"], "potential");
        let potential = &v[0]["value"];
        assert_eq!(potential[0]["key"], "tag");
        assert_eq!(potential[0]["value"], "FRA");
        assert_eq!(potential[1]["value"], "BUR");
        assert_eq!(potential[2]["value"][0]["key"], "has_country_flag");
    }

    #[test]
    fn test_export_scalars() {
        let doc = parse_str(
            r#"
            1444 = { owner = FRA }
            start = 1444.11.11
            weight = 0.5
            count = -3
            major = yes
            name = "Kingdom of France"
            provinces = { 183 184 }
            empty = { }
            "#,
        )
        .unwrap();

        let v: serde_json::Value = serde_json::from_str(&export_document_to_json(&doc).unwrap()).unwrap();

        assert_eq!(v[0]["key"], 1444);
        assert_eq!(v[1]["value"], "1444.11.11");
        assert_eq!(v[2]["value"], 0.5);
        assert_eq!(v[3]["value"], -3);
        assert_eq!(v[4]["value"], true);
        assert_eq!(v[5]["value"], "\"Kingdom of France\"");
        assert_eq!(v[6]["value"], json!([183, 184]));
        assert_eq!(v[7]["value"], json!([]));
    }

    #[test]
    fn test_export_script_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policies.txt");
        fs::write(&path, "merchant_policy = { potential = { has_idea_group = trade_ideas } }").unwrap();

        let json_output = export_script_file(&path).expect("Failed to export file");
        assert!(json_output.contains("merchant_policy"));

        assert!(export_script_file(dir.path().join("missing.txt")).is_err());
    }
}

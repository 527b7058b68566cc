use std::path::{Path, PathBuf};

use crate::ScriptError;

/// Expand a leading `~/` to the home directory.
pub(crate) fn resolve_path(raw_path: &Path) -> PathBuf {
    if let Ok(rest) = raw_path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    raw_path.to_path_buf()
}

/// Read a script, dropping invalid UTF-8 instead of failing. Game files are
/// often saved as Windows-1252.
pub(crate) fn read_script(path: &Path) -> Result<String, ScriptError> {
    let bytes = std::fs::read(path).map_err(|e| ScriptError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Find the first line that assigns the last segment of `path`, for error
/// messages. Returns `(0, "")` when nothing matches.
pub(super) fn find_script_line(path: &str, raw_content: &str) -> (usize, String) {
    let last = match path.rsplit('.').next() {
        Some(seg) if !seg.is_empty() => seg,
        _ => return (0, String::new()),
    };

    for (idx, line) in raw_content.lines().enumerate() {
        let code = line.split('#').next().unwrap_or("");
        if let Some((lhs, _)) = code.split_once('=') {
            let key = lhs.trim().rsplit(|c: char| c == '{' || c.is_whitespace()).next();
            if key == Some(last) {
                return (idx + 1, line.trim().to_string());
            }
        }
    }

    (0, String::new())
}

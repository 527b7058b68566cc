// Author: Dustin Pilgrim
// License: MIT

//! Parsing many files where one bad file must not sink the rest.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::Document;
use crate::options::ParseOptions;
use crate::parser;
use crate::script::helpers::{read_script, resolve_path};
use crate::ScriptError;

/// The outcome of parsing one file of a batch.
#[derive(Debug)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub result: Result<Document, ScriptError>,
}

impl ParsedFile {
    pub fn document(&self) -> Option<&Document> {
        self.result.as_ref().ok()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }
}

/// Parse one file.
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Document, ScriptError> {
    let content = read_script(path)?;
    parser::parse_str_with(&content, options)
}

/// Parse every path independently, in the given order. Failures are logged
/// and kept in the result; they never stop the batch.
pub fn parse_files<I, P>(paths: I, options: &ParseOptions) -> Vec<ParsedFile>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|p| {
            let path = resolve_path(p.as_ref());
            let result = parse_file(&path, options);
            let parsed = ParsedFile { path, result };
            match &parsed.result {
                Ok(doc) => log::debug!("{}: parsed {} entries", parsed.file_name(), doc.len()),
                Err(e) => log::warn!("{}: failed to parse: {}", parsed.file_name(), e),
            }
            parsed
        })
        .collect()
}

/// Parse every regular file of `dir`, sorted by name.
pub fn parse_dir<P: AsRef<Path>>(dir: P, options: &ParseOptions) -> Result<Vec<ParsedFile>, ScriptError> {
    let paths = read_dir_sorted(dir)?;
    Ok(parse_files(paths, options))
}

/// Documents that parsed, in batch order.
pub fn documents(files: &[ParsedFile]) -> impl Iterator<Item = &Document> {
    files.iter().filter_map(ParsedFile::document)
}

/// Regular files directly inside `dir`, sorted by name.
pub fn read_dir_sorted<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, ScriptError> {
    let dir = resolve_path(dir.as_ref());
    let file_error = |e: std::io::Error| ScriptError::FileError {
        message: format!("Failed to read directory: {}", e),
        path: dir.to_string_lossy().to_string(),
        hint: Some("Check that the directory exists and is readable".into()),
        code: Some(310),
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(&dir).map_err(file_error)? {
        let path = entry.map_err(file_error)?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Walk up from `path` to the first directory that holds a `localisation`
/// folder, which is how mod and game roots are recognised.
pub fn find_mod_root<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = resolve_path(path.as_ref());
    let start = fs::canonicalize(&path).unwrap_or(path);

    start
        .ancestors()
        .find(|dir| dir.join("localisation").is_dir())
        .map(Path::to_path_buf)
}

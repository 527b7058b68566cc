// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::ast::Document;
use crate::options::ParseOptions;
use crate::parser;
use crate::ScriptError;

mod access;
mod conversion;
pub(crate) mod helpers;

/// One parsed script file plus its source, with typed dot-path lookups.
pub struct ScriptFile {
    document: Document,
    raw_content: String, // Store for error reporting
}

impl ScriptFile {
    /// Read and parse a script file.
    ///
    /// # Example
    /// ```ignore
    /// let ideas = ScriptFile::from_file("common/ideas/00_basic_ideas.txt")?;
    /// let category: String = ideas.get("trade_ideas.category")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        Self::from_file_with(path, &ParseOptions::default())
    }

    pub fn from_file_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self, ScriptError> {
        let path = helpers::resolve_path(path.as_ref());
        let content = helpers::read_script(&path)?;
        Self::from_str_with(&content, options)
    }

    /// Parse a script from a string (no file I/O)
    pub fn from_str(content: &str) -> Result<Self, ScriptError> {
        Self::from_str_with(content, &ParseOptions::default())
    }

    pub fn from_str_with(content: &str, options: &ParseOptions) -> Result<Self, ScriptError> {
        let document = parser::parse_str_with(content, options)?;
        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }
}

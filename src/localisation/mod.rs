//! Paradox `.yml` localisation files.
//!
//! These are not YAML. Each file is a language header (`l_english:`) followed
//! by `key:version "value"` lines, where the version is optional and the value
//! runs from the first to the last double quote on the line.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::batch::read_dir_sorted;
use crate::options::ReportOptions;
use crate::script::helpers::{read_script, resolve_path};
use crate::ScriptError;

static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([A-Za-z0-9_.\-]+):\s*([0-9]+)?\s*"(.*)"\s*(?:#.*)?$"#)
        .expect("valid localisation entry pattern")
});

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^l_([A-Za-z_]+):\s*(?:#.*)?$").expect("valid language header pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalisationEntry {
    pub key: String,
    pub version: u32,
    /// Text between the outer quotes, unescaped formatting codes included.
    pub value: String,
    pub line: usize,
}

/// Parse one localisation file. Lines that fit neither the header nor the
/// entry shape are logged and skipped.
pub fn parse_localisation(text: &str) -> Vec<LocalisationEntry> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || HEADER.is_match(line) {
            continue;
        }

        match ENTRY.captures(line) {
            Some(caps) => {
                let version = match caps.get(2) {
                    Some(v) => match v.as_str().parse() {
                        Ok(v) => v,
                        Err(_) => {
                            log::warn!("line {}: version '{}' out of range", idx + 1, v.as_str());
                            continue;
                        }
                    },
                    None => 0,
                };
                entries.push(LocalisationEntry {
                    key: caps[1].to_string(),
                    version,
                    value: caps[3].to_string(),
                    line: idx + 1,
                });
            }
            None => log::warn!("line {}: not a localisation entry: {}", idx + 1, line),
        }
    }

    entries
}

/// Localisation keys merged from several directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalisationTable {
    entries: IndexMap<String, LocalisationEntry>,
}

impl LocalisationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `<dir>/localisation/*l_<language>.yml` from each directory.
    ///
    /// Directories are given highest priority first, a mod before the base
    /// game. A file whose name was already read from an earlier directory
    /// replaces the later one entirely, and within what is read the first
    /// definition of a key wins. Directories without a `localisation` folder
    /// and files that can't be read are logged and skipped.
    pub fn load<P: AsRef<Path>>(dirs: &[P], language: &str) -> Result<Self, ScriptError> {
        let suffix = format!("l_{}.yml", language);
        let mut table = Self::new();
        let mut seen_files: HashSet<String> = HashSet::new();

        for dir in dirs {
            let loc_dir = resolve_path(dir.as_ref()).join("localisation");
            if !loc_dir.is_dir() {
                log::warn!("{}: no localisation folder, skipped", loc_dir.display());
                continue;
            }

            for path in read_dir_sorted(&loc_dir)? {
                let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                    continue;
                };
                if !name.ends_with(&suffix) || !seen_files.insert(name) {
                    continue;
                }

                let text = match read_script(&path) {
                    Ok(text) => text,
                    Err(e) => {
                        log::warn!("{}: skipped: {}", path.display(), e);
                        continue;
                    }
                };
                let before = table.len();
                table.extend(parse_localisation(&text));
                log::debug!("{}: {} new keys", path.display(), table.len() - before);
            }
        }

        Ok(table)
    }

    /// [`LocalisationTable::load`] in the language the report is set to.
    pub fn load_for<P: AsRef<Path>>(dirs: &[P], options: &ReportOptions) -> Result<Self, ScriptError> {
        Self::load(dirs, &options.language)
    }

    /// Add an entry unless its key is already defined.
    pub fn insert(&mut self, entry: LocalisationEntry) -> bool {
        if self.entries.contains_key(&entry.key) {
            return false;
        }
        self.entries.insert(entry.key.clone(), entry);
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.value.as_str())
    }

    pub fn entry(&self, key: &str) -> Option<&LocalisationEntry> {
        self.entries.get(key)
    }

    /// The localised text for `key`, or the key itself when it has none.
    pub fn display<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalisationEntry> {
        self.entries.values()
    }
}

impl Extend<LocalisationEntry> for LocalisationTable {
    fn extend<T: IntoIterator<Item = LocalisationEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<LocalisationEntry> for LocalisationTable {
    fn from_iter<T: IntoIterator<Item = LocalisationEntry>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

//! Behaviour switches, passed explicitly into the calls that use them.

/// Default nesting limit shared by the parser and the walker.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest block nesting accepted before the parse fails.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Control blocks nested deeper than this contribute nothing.
    pub max_depth: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        WalkOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl WalkOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Rules for the mission and policy reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// A mission whose icon contains one of these is counted as branching.
    pub branching_icons: Vec<String>,
    /// Mission group entries that are never missions (compared lowercase).
    pub skipped_mission_keys: Vec<String>,
    /// Idea groups that have no policies on purpose.
    pub policy_exempt_groups: Vec<String>,
    /// `category` values that mark an idea group.
    pub idea_categories: Vec<String>,
    /// Localisation language, as in `l_english.yml`.
    pub language: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            branching_icons: vec![
                "mission_unknown_mission".into(),
                "mission_locked_mission".into(),
            ],
            skipped_mission_keys: ["potential", "generic", "ai", "has_country_shield", "slot"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            policy_exempt_groups: Vec::new(),
            idea_categories: vec!["ADM".into(), "DIP".into(), "MIL".into()],
            language: "english".into(),
        }
    }
}

impl ReportOptions {
    pub fn with_branching_icons<I, S>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branching_icons = icons.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_policy_exempt_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy_exempt_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn is_skipped_mission_key(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.skipped_mission_keys.iter().any(|k| *k == key)
    }
}

use std::fmt;

/// The main error type for Clausewitz lexing, parsing and lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    /// A character the lexer does not recognise. Only ever surfaced as a
    /// diagnostic; tokenization resumes after it.
    IllegalCharacter {
        character: char,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// An unexpected token. `index` is the sequential consumption index of
    /// the token within the parse call.
    SyntaxError {
        token: String,
        kind: String,
        line: usize,
        index: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedEof {
        line: usize,
        index: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when blocks nest deeper than the configured limit.
    DepthExceeded {
        line: usize,
        limit: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl ScriptError {
    /// Line the error points at, when it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::IllegalCharacter { line, .. }
            | ScriptError::SyntaxError { line, .. }
            | ScriptError::UnexpectedEof { line, .. }
            | ScriptError::DepthExceeded { line, .. } => Some(*line),
            _ => None,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::IllegalCharacter { character, line, hint, code } =>
                write!(f, "[PDX] Illegal character {:?} at line {}{}",
                    character, line, suffix(hint, code)
                ),
            ScriptError::SyntaxError { token, kind, line, index, hint, code } =>
                write!(f, "[PDX] Syntax Error: token={} type={} line={} index={}{}",
                    token, kind, line, index, suffix(hint, code)
                ),
            ScriptError::UnexpectedEof { line, index, hint, code } =>
                write!(f, "[PDX] Unexpected EOF at line {} (index {}){}",
                    line, index, suffix(hint, code)
                ),
            ScriptError::DepthExceeded { line, limit, hint, code } =>
                write!(f, "[PDX] Nesting deeper than {} at line {}{}",
                    limit, line, suffix(hint, code)
                ),
            ScriptError::TypeError { message, path, hint, code } =>
                write!(f, "[PDX] Type Error at '{}': {}{}",
                    path, message, suffix(hint, code)
                ),
            ScriptError::MissingKey { path, hint, code } =>
                write!(f, "[PDX] Missing key '{}'{}",
                    path, suffix(hint, code)
                ),
            ScriptError::FileError { message, path, hint, code } =>
                write!(f, "[PDX] File Error '{}': {}{}",
                    path, message, suffix(hint, code)
                ),
        }
    }
}

impl std::error::Error for ScriptError {}

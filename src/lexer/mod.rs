// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::ScriptError;
use crate::ast::Date;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // --- literals ---
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(Date),
    String(String),

    // --- structure ---
    Specifier,
    BraceOpen,
    BraceClose,
}

impl TokenKind {
    /// Grammar name of the token, as reported in syntax errors.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "INTEGER",
            TokenKind::Float(_) => "FLOAT",
            TokenKind::Bool(_) => "BOOL",
            TokenKind::Date(_) => "DATE",
            TokenKind::String(_) => "STRING",
            TokenKind::Specifier => "SPECIFIER",
            TokenKind::BraceOpen => "{",
            TokenKind::BraceClose => "}",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(n) => write!(f, "{}", n),
            TokenKind::Float(x) => write!(f, "{}", x),
            TokenKind::Bool(true) => write!(f, "yes"),
            TokenKind::Bool(false) => write!(f, "no"),
            TokenKind::Date(d) => write!(f, "{}", d),
            TokenKind::String(s) => write!(f, "{}", s),
            TokenKind::Specifier => write!(f, "="),
            TokenKind::BraceOpen => write!(f, "{{"),
            TokenKind::BraceClose => write!(f, "}}"),
        }
    }
}

/// A token and the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Token { kind, line }
    }
}

/// Lazily tokenizes one input. Illegal characters never stop the lexer: they
/// are logged, recorded in [`Lexer::diagnostics`] and skipped.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    diagnostics: Vec<ScriptError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let pos = if input.starts_with('\u{feff}') {
            '\u{feff}'.len_utf8()
        } else {
            0
        };
        Lexer {
            input,
            pos,
            line: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Lexical errors recovered from so far.
    pub fn diagnostics(&self) -> &[ScriptError] {
        &self.diagnostics
    }

    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            match tokenizer::next_token(self)? {
                Ok(token) => return Some(token),
                Err(err) => {
                    log::warn!("{}", err);
                    self.diagnostics.push(err);
                }
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Start tokenizing `text`. Every call gets a fresh lexer.
pub fn tokenize(text: &str) -> Lexer<'_> {
    Lexer::new(text)
}

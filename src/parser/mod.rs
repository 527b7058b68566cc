use std::collections::VecDeque;

use crate::ScriptError;
use crate::ast::{Document, Key, Scalar, Value};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::options::ParseOptions;

mod document;
mod value;

/// Recursive-descent parser over any token stream. One parser handles one
/// file; it keeps no state once the document is returned.
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    lookahead: VecDeque<Token>,
    index: usize,
    line: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<Lexer<'a>> {
    pub fn from_str(input: &'a str) -> Self {
        Parser::new(Lexer::new(input))
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::with_options(tokens, &ParseOptions::default())
    }

    pub fn with_options<T>(tokens: T, options: &ParseOptions) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            tokens: tokens.into_iter(),
            lookahead: VecDeque::with_capacity(2),
            index: 0,
            line: 1,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn fill(&mut self, n: usize) {
        while self.lookahead.len() < n {
            match self.tokens.next() {
                Some(tok) => self.lookahead.push_back(tok),
                None => break,
            }
        }
    }

    pub(crate) fn bump(&mut self) -> Result<Token, ScriptError> {
        self.fill(1);
        let curr = self.lookahead.pop_front().ok_or(ScriptError::UnexpectedEof {
            line: self.line,
            index: self.index,
            hint: Some("Check for an unclosed '{'".into()),
            code: Some(201),
        })?;
        self.index += 1;
        self.line = curr.line;
        Ok(curr)
    }

    pub(crate) fn peek(&mut self) -> Option<&Token> {
        self.fill(1);
        self.lookahead.front()
    }

    pub(crate) fn peek_second(&mut self) -> Option<&Token> {
        self.fill(2);
        self.lookahead.get(1)
    }

    pub(crate) fn expect(&mut self, expected: TokenKind) -> Result<Token, ScriptError> {
        let token = self.bump()?;
        if token.kind != expected {
            return Err(self.unexpected(&token, format!("Expected '{}'", expected)));
        }
        Ok(token)
    }

    /// Syntax error for a token that was just consumed.
    pub(crate) fn unexpected(&self, token: &Token, hint: String) -> ScriptError {
        ScriptError::SyntaxError {
            token: token.kind.to_string(),
            kind: token.kind.name().to_string(),
            line: token.line,
            index: self.index - 1,
            hint: Some(hint),
            code: Some(202),
        }
    }

    pub(crate) fn enter_block(&mut self) -> Result<(), ScriptError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ScriptError::DepthExceeded {
                line: self.line,
                limit: self.max_depth,
                hint: Some("Blocks are nested too deeply".into()),
                code: Some(203),
            });
        }
        Ok(())
    }

    pub(crate) fn leave_block(&mut self) {
        self.depth -= 1;
    }

    pub fn parse_document(&mut self) -> Result<Document, ScriptError> {
        document::parse_document(self)
    }
}

/// Parse a token stream into a document.
pub fn parse<T>(tokens: T) -> Result<Document, ScriptError>
where
    T: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse_document()
}

/// Tokenize and parse `input` with default options.
pub fn parse_str(input: &str) -> Result<Document, ScriptError> {
    parse_str_with(input, &ParseOptions::default())
}

pub fn parse_str_with(input: &str, options: &ParseOptions) -> Result<Document, ScriptError> {
    Parser::with_options(Lexer::new(input), options).parse_document()
}

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use super::scanner::{advance, bump, peek_char, rest, skip_whitespace_and_comments};

// At most two decimal points: `1`, `1.5`, `1444.11.11`. A third dot is left
// for the next token.
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+(?:\.[0-9]+)?)?").expect("valid number pattern"));

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"[^"]*""#).expect("valid quoted pattern"));

static BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_.%:-]*").expect("valid bare word pattern"));

/// Produce the next token, or the error for something that had to be
/// skipped. `None` at end of input.
pub(super) fn next_token(lexer: &mut Lexer) -> Option<Result<Token, ScriptError>> {
    skip_whitespace_and_comments(lexer);

    let line = lexer.line;
    let result = match peek_char(lexer)? {
        '=' => tokenize_symbol(lexer, TokenKind::Specifier),
        '{' => tokenize_symbol(lexer, TokenKind::BraceOpen),
        '}' => tokenize_symbol(lexer, TokenKind::BraceClose),
        '"' => tokenize_quoted(lexer),
        c if c.is_ascii_digit() || c == '-' => tokenize_number(lexer),
        c if c.is_ascii_alphabetic() => tokenize_identifier_or_keyword(lexer),
        ch => tokenize_unexpected_char(lexer, ch),
    };

    Some(result.map(|kind| Token::new(kind, line)))
}

fn tokenize_symbol(lexer: &mut Lexer, kind: TokenKind) -> Result<TokenKind, ScriptError> {
    bump(lexer);
    Ok(kind)
}

fn tokenize_quoted(lexer: &mut Lexer) -> Result<TokenKind, ScriptError> {
    let len = match QUOTED.find(rest(lexer)) {
        Some(m) => m.end(),
        // No closing quote anywhere ahead
        None => return tokenize_unexpected_char(lexer, '"'),
    };
    let literal = advance(lexer, len);

    // Display strings keep their quotes, plain ones lose them
    if literal.contains(' ') {
        Ok(TokenKind::String(literal.to_string()))
    } else {
        Ok(TokenKind::String(literal.trim_matches('"').to_string()))
    }
}

fn tokenize_number(lexer: &mut Lexer) -> Result<TokenKind, ScriptError> {
    let len = match NUMBER.find(rest(lexer)) {
        Some(m) => m.end(),
        None => return tokenize_unexpected_char(lexer, '-'),
    };
    let literal = advance(lexer, len);

    let parts: Vec<&str> = literal.split('.').collect();
    let kind = match parts.as_slice() {
        [int] => int.parse::<i64>().ok().map(TokenKind::Integer),
        [_, _] => literal.parse::<f64>().ok().map(TokenKind::Float),
        [year, month, day] => match (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>()) {
            (Ok(year), Ok(month), Ok(day)) => Some(TokenKind::Date(Date::new(year, month, day))),
            _ => None,
        },
        _ => None,
    };

    Ok(kind.unwrap_or_else(|| out_of_range(literal, parts.len())))
}

/// An integer too large for `i64` becomes a float; a date with an
/// oversized part keeps its source text.
fn out_of_range(literal: &str, parts: usize) -> TokenKind {
    log::debug!("numeric literal '{}' out of range, widened", literal);
    match literal.parse::<f64>() {
        Ok(x) if parts == 1 => TokenKind::Float(x),
        _ => TokenKind::String(literal.to_string()),
    }
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer) -> Result<TokenKind, ScriptError> {
    let len = BARE.find(rest(lexer)).map_or(1, |m| m.end());
    let ident = advance(lexer, len);

    // Whole-word match only, `yesman` stays a string
    let kind = match ident {
        "yes" => TokenKind::Bool(true),
        "no" => TokenKind::Bool(false),
        _ => TokenKind::String(ident.to_string()),
    };

    Ok(kind)
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: char) -> Result<TokenKind, ScriptError> {
    let line = lexer.line;
    bump(lexer);
    Err(ScriptError::IllegalCharacter {
        character: ch,
        line,
        hint: Some("Character skipped".into()),
        code: Some(101),
    })
}

use super::*;
use super::document::parse_pair;

pub(super) fn parse_value<I: Iterator<Item = Token>>(
    parser: &mut Parser<I>,
) -> Result<Value, ScriptError> {
    let token = parser.bump()?;
    let scalar = match token.kind {
        TokenKind::Integer(n) => Scalar::Integer(n),
        TokenKind::Float(x) => Scalar::Float(x),
        TokenKind::Bool(b) => Scalar::Bool(b),
        TokenKind::Date(d) => Scalar::Date(d),
        TokenKind::String(s) => Scalar::String(s),
        TokenKind::BraceOpen => return parse_block(parser),
        _ => {
            return Err(parser.unexpected(&token, "Unexpected token in value position".into()));
        }
    };
    Ok(Value::Scalar(scalar))
}

/// Parse the inside of a block whose `{` was already consumed. The first
/// element decides the shape of the whole block.
fn parse_block<I: Iterator<Item = Token>>(
    parser: &mut Parser<I>,
) -> Result<Value, ScriptError> {
    parser.enter_block()?;

    let value = if starts_pair(parser) {
        parse_object_items(parser).map(Value::Object)?
    } else {
        parse_array_items(parser).map(Value::Array)?
    };

    parser.leave_block();
    Ok(value)
}

fn starts_pair<I: Iterator<Item = Token>>(parser: &mut Parser<I>) -> bool {
    let is_field = matches!(
        parser.peek().map(|t| &t.kind),
        Some(TokenKind::String(_)) | Some(TokenKind::Integer(_))
    );
    is_field && matches!(parser.peek_second().map(|t| &t.kind), Some(TokenKind::Specifier))
}

fn at_block_end<I: Iterator<Item = Token>>(parser: &mut Parser<I>) -> Result<bool, ScriptError> {
    let closing = parser.peek().map(|tok| tok.kind == TokenKind::BraceClose);
    match closing {
        Some(true) => {
            parser.bump()?;
            Ok(true)
        }
        Some(false) => Ok(false),
        None => {
            // Surface the EOF error with the right line and index
            parser.bump()?;
            Ok(true)
        }
    }
}

fn parse_object_items<I: Iterator<Item = Token>>(
    parser: &mut Parser<I>,
) -> Result<Vec<(Key, Value)>, ScriptError> {
    let mut items = Vec::new();
    while !at_block_end(parser)? {
        items.push(parse_pair(parser)?);
    }
    Ok(items)
}

fn parse_array_items<I: Iterator<Item = Token>>(
    parser: &mut Parser<I>,
) -> Result<Vec<Value>, ScriptError> {
    let mut items = Vec::new();
    while !at_block_end(parser)? {
        items.push(parse_value(parser)?);
    }
    Ok(items)
}

use super::*;

pub(super) fn parse_document<I: Iterator<Item = Token>>(
    parser: &mut Parser<I>,
) -> Result<Document, ScriptError> {
    let mut pairs = Vec::new();

    while parser.peek().is_some() {
        pairs.push(parse_pair(parser)?);
    }

    Ok(Document::new(pairs))
}

/// `field "=" value`
pub(super) fn parse_pair<I: Iterator<Item = Token>>(
    parser: &mut Parser<I>,
) -> Result<(Key, Value), ScriptError> {
    let token = parser.bump()?;
    let key = match token.kind {
        TokenKind::String(s) => Key::String(s),
        TokenKind::Integer(n) => Key::Integer(n),
        _ => {
            return Err(parser.unexpected(&token, "Expected a key".into()));
        }
    };

    parser.expect(TokenKind::Specifier)?;
    let value = value::parse_value(parser)?;

    Ok((key, value))
}

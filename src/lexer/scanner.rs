use super::*;

/// The unconsumed part of the input.
pub(super) fn rest<'a>(lexer: &Lexer<'a>) -> &'a str {
    let input = lexer.input;
    &input[lexer.pos..]
}

/// Peek at the current character without consuming it
pub(super) fn peek_char(lexer: &Lexer) -> Option<char> {
    rest(lexer).chars().next()
}

/// Advance one character and update line tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = peek_char(lexer)?;
    if curr == '\n' {
        lexer.line += 1;
    }
    lexer.pos += curr.len_utf8();
    Some(curr)
}

/// Consume `len` bytes, counting any newlines inside them
pub(super) fn advance<'a>(lexer: &mut Lexer<'a>, len: usize) -> &'a str {
    let input = lexer.input;
    let start = lexer.pos;
    let end = start + len;
    let consumed = &input[start..end];
    lexer.line += consumed.matches('\n').count();
    lexer.pos = end;
    consumed
}

/// Skip whitespace, newlines and comments
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = peek_char(lexer) {
        match c {
            ' ' | '\t' | '\r' | '\n' => {
                bump(lexer);
            }
            '#' => {
                // Comment runs to end of line, the newline itself is left
                while let Some(ch) = peek_char(lexer) {
                    if ch == '\n' {
                        break;
                    }
                    bump(lexer);
                }
            }
            _ => break,
        }
    }
}

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, ParseState},
    },
};

/// The most arguments a call, or parameters a declaration, may list.
pub const MAX_ARGUMENTS: usize = 255;

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists and function parameter
/// lists. It repeatedly calls `parse_item` to parse one element, then
/// continues on a comma. An immediately encountered closing token produces an
/// empty list.
///
/// Going over [`MAX_ARGUMENTS`] is reported once but the remaining items are
/// still parsed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `state`: Cursor positioned at the first item or the closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
/// - `expected`: Message used when the closing token is missing.
///
/// # Returns
/// The parsed items and the closing token.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or the closing token is
/// missing.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    state: &mut ParseState<'_, '_>,
    parse_item: impl Fn(&mut ParseState<'_, '_>) -> ParseResult<T>,
    closing: TokenKind,
    expected: &str)
    -> ParseResult<(Vec<T>, Token)> {
    let mut items = Vec::new();
    if !state.check(closing) {
        loop {
            if items.len() == MAX_ARGUMENTS {
                let line = state.peek().line;
                state.report(&ParseError::TooManyArguments { max: MAX_ARGUMENTS,
                                                             line });
            }
            items.push(parse_item(state)?);
            if state.matches(&[TokenKind::Comma]).is_none() {
                break;
            }
        }
    }
    let closing = state.expect(closing, expected)?.clone();

    Ok((items, closing))
}

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses one top-level declaration.
///
/// Grammar: `declaration := funDecl | letDecl | statement`
///
/// # Parameters
/// - `state`: Cursor positioned at the first token of the declaration.
///
/// # Returns
/// The parsed `Statement`.
///
/// # Errors
/// Returns the first syntax error met; the caller reports it and
/// resynchronizes.
pub fn parse_declaration(state: &mut ParseState<'_, '_>) -> ParseResult<Statement> {
    if state.matches(&[TokenKind::Def]).is_some() {
        return parse_function(state);
    }
    if state.matches(&[TokenKind::Let]).is_some() {
        return parse_let(state);
    }
    parse_statement(state)
}

/// Parses `print expr;` or a bare `expr;`.
pub fn parse_statement(state: &mut ParseState<'_, '_>) -> ParseResult<Statement> {
    if state.matches(&[TokenKind::Print]).is_some() {
        let expr = parse_expression(state)?;
        state.expect(TokenKind::Semicolon, "Expect ';' after value")?;
        return Ok(Statement::Print { expr });
    }

    let expr = parse_expression(state)?;
    state.expect(TokenKind::Semicolon, "Expect ';' after expression")?;
    Ok(Statement::Expression { expr })
}

/// Parses the rest of `let name = initializer;` after the keyword.
fn parse_let(state: &mut ParseState<'_, '_>) -> ParseResult<Statement> {
    let name = state.expect(TokenKind::Identifier, "Expect variable name")?
                    .clone();
    state.expect(TokenKind::Equal, "Expect '=' after name")?;
    let initializer = parse_expression(state)?;
    state.expect(TokenKind::Semicolon, "Expect ';' after value")?;

    Ok(Statement::Let { name, initializer })
}

/// Parses the rest of `def name(params) = body;` after the keyword.
///
/// Like call arguments, parameters are capped at 255; going over is reported
/// but does not stop the parse.
fn parse_function(state: &mut ParseState<'_, '_>) -> ParseResult<Statement> {
    let name = state.expect(TokenKind::Identifier, "Expect function name")?
                    .clone();
    state.expect(TokenKind::LeftParen, "Expect '(' after function name")?;
    let (params, _) = parse_comma_separated(state,
                                            |state| {
                                                state.expect(TokenKind::Identifier,
                                                             "Expect parameter name")
                                                     .cloned()
                                            },
                                            TokenKind::RightParen,
                                            "Expect ')' after parameters")?;
    state.expect(TokenKind::Equal, "Expect '=' after ')'")?;
    let body = parse_expression(state)?;
    state.expect(TokenKind::Semicolon, "Expect ';' after function declaration")?;

    Ok(Statement::Function(FunctionDef { name, params, body }))
}

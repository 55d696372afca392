use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
            set::parse_set_tail,
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports arithmetic negation `-x` and logical NOT `!x`, nested to any
/// depth (`!!x`, `--x`).
///
/// The rule is: `unary := ("-" | "!") unary | call`
///
/// # Parameters
/// - `state`: The token cursor.
///
/// # Returns
/// An `Expr::Unary` node, or the call-level expression.
pub fn parse_unary(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    if let Some(operator) = state.matches(&[TokenKind::Minus, TokenKind::Bang]) {
        let op = if operator.kind == TokenKind::Minus {
            UnaryOperator::Negate
        } else {
            UnaryOperator::Not
        };
        let expr = state.nested(parse_unary)?;
        return Ok(Expr::Unary { op,
                                operator: operator.clone(),
                                expr: Box::new(expr) });
    }
    parse_call(state)
}

/// Parses a primary expression followed by any number of call suffixes.
///
/// The rule is: `call := primary ("(" arguments? ")")*`
pub fn parse_call(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    let mut expr = parse_primary(state)?;
    while state.matches(&[TokenKind::LeftParen]).is_some() {
        let (arguments, paren) = parse_comma_separated(state,
                                                       parse_expression,
                                                       TokenKind::RightParen,
                                                       "Expect ')' after arguments")?;
        expr = Expr::Call { callee: Box::new(expr),
                            paren,
                            arguments };
    }
    Ok(expr)
}

/// Parses a primary expression.
///
/// The rule is:
/// ```text
/// primary := NUMBER | STRING | "true" | "false"
///          | "|" expression "|"
///          | IDENT | "(" expression ")"
///          | "{" setTail
/// ```
///
/// # Errors
/// Returns `Expect expression` when the current token cannot start one; the
/// token is not consumed.
pub fn parse_primary(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    match state.peek().kind {
        TokenKind::Number | TokenKind::String | TokenKind::True | TokenKind::False => {
            let Some(value) = state.peek().literal.clone() else {
                return Err(state.error_at_current("Expect literal value"));
            };
            state.advance();
            Ok(Expr::Literal { value })
        },
        TokenKind::Identifier => Ok(Expr::Variable { name: state.advance().clone() }),
        TokenKind::LeftParen => {
            state.advance();
            let expr = parse_expression(state)?;
            state.expect(TokenKind::RightParen, "Expect ')' after expression")?;
            Ok(Expr::Grouping { expr: Box::new(expr) })
        },
        TokenKind::Pipe => {
            let pipe = state.advance().clone();
            let expr = parse_expression(state)?;
            state.expect(TokenKind::Pipe, "Expect '|' after cardinality operand")?;
            Ok(Expr::Cardinality { pipe,
                                   expr: Box::new(expr) })
        },
        TokenKind::LeftBrace => {
            state.advance();
            parse_set_tail(state)
        },
        _ => Err(state.error_at_current("Expect expression")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{LiteralValue, Statement},
        error::ParseError,
        interpreter::{lexer::scan, parser::core::parse, parser::utils::MAX_ARGUMENTS},
        report::Diagnostic,
    };

    fn expression(source: &str) -> Expr {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let parsed = parse(&scan(&format!("{source};")).tokens, &mut diagnostics);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        match parsed.statements.into_iter().next() {
            Some(Statement::Expression { expr }) => expr,
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    #[test]
    fn nested_unary_operators() {
        let Expr::Unary { op, expr, .. } = expression("!!true") else {
            panic!("expected a unary node");
        };

        assert_eq!(op, UnaryOperator::Not);
        assert!(matches!(*expr, Expr::Unary { op: UnaryOperator::Not, .. }));
    }

    #[test]
    fn negation_applies_before_multiplication() {
        assert!(matches!(expression("-2 * 3"), Expr::Binary { .. }));
    }

    #[test]
    fn cardinality_wraps_a_full_expression() {
        let Expr::Cardinality { pipe, expr } = expression("|A union B|") else {
            panic!("expected a cardinality node");
        };

        assert_eq!(pipe.kind, TokenKind::Pipe);
        assert!(matches!(*expr, Expr::Binary { .. }));
    }

    #[test]
    fn chained_calls_keep_the_closing_paren() {
        let Expr::Call { callee, paren, arguments } = expression("f(1)(2, 3)") else {
            panic!("expected a call");
        };

        assert_eq!(paren.lexeme, ")");
        assert_eq!(arguments.len(), 2);
        assert!(matches!(*callee, Expr::Call { .. }));
    }

    #[test]
    fn literals_keep_their_values() {
        assert_eq!(expression("\"hi\""),
                   Expr::Literal { value: LiteralValue::Str("hi".to_string()) });
        assert_eq!(expression("false"),
                   Expr::Literal { value: LiteralValue::Bool(false) });
    }

    #[test]
    fn argument_cap_reports_once_and_keeps_parsing() {
        let arguments = vec!["1"; MAX_ARGUMENTS + 2].join(", ");
        let source = format!("f({arguments});\nprint 2;");
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let parsed = parse(&scan(&source).tokens, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message,
                   ParseError::TooManyArguments { max:  MAX_ARGUMENTS,
                                                  line: 1, }.to_string());
        assert_eq!(parsed.statements.len(), 2);
        let Statement::Expression { expr: Expr::Call { arguments, .. } } = &parsed.statements[0]
        else {
            panic!("expected a call statement");
        };
        assert_eq!(arguments.len(), MAX_ARGUMENTS + 2);
    }

    #[test]
    fn stray_token_is_not_an_expression() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        parse(&scan("print );").tokens, &mut diagnostics);

        assert_eq!(diagnostics[0].message, "Expect expression, found ')'.");
    }
}

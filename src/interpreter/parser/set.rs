use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, ParseState, parse_expression},
    },
};

/// Parses the rest of a set expression after its opening `{`.
///
/// Rosters and comprehensions share the `{ expr` prefix, so one full
/// expression is parsed first and the next token decides: `|` starts a
/// comprehension, `,` or `}` continues a roster. `{}` is the empty roster.
///
/// Grammar:
/// ```text
/// setTail := "}"
///          | expression ( "|" IDENT "in" expression ("," expression)? "}"
///                       | ("," expression)* "}" )
/// ```
///
/// # Parameters
/// - `state`: Cursor positioned just after `{`.
///
/// # Returns
/// An `Expr::SetLiteral` or an `Expr::Comprehension`.
///
/// # Errors
/// Returns a `ParseError` if an element fails to parse, the comprehension
/// head is malformed, or the closing `}` is missing.
pub fn parse_set_tail(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    if state.matches(&[TokenKind::RightBrace]).is_some() {
        return Ok(Expr::SetLiteral { elements: Vec::new() });
    }

    let first = parse_expression(state)?;

    if state.matches(&[TokenKind::Pipe]).is_some() {
        return parse_comprehension(state, first);
    }

    let mut elements = vec![first];
    while state.matches(&[TokenKind::Comma]).is_some() {
        elements.push(parse_expression(state)?);
    }
    state.expect(TokenKind::RightBrace, "Expect '}' after set literal")?;

    Ok(Expr::SetLiteral { elements })
}

fn parse_comprehension(state: &mut ParseState<'_, '_>, result: Expr) -> ParseResult<Expr> {
    let variable = state.expect(TokenKind::Identifier, "Expect variable name after '|'")?
                        .clone();
    state.expect(TokenKind::In, "Expect 'in' after comprehension variable")?;
    let domain = parse_expression(state)?;
    let filter = match state.matches(&[TokenKind::Comma]) {
        Some(_) => Some(Box::new(parse_expression(state)?)),
        None => None,
    };
    state.expect(TokenKind::RightBrace, "Expect '}' after set comprehension")?;

    Ok(Expr::Comprehension { result: Box::new(result),
                             variable,
                             domain: Box::new(domain),
                             filter })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::Statement,
        interpreter::{lexer::scan, parser::core::parse},
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
    fn pipe_after_first_element_means_comprehension() {
        let Expr::Comprehension { variable, filter, .. } = expression("{x | x in A}") else {
            panic!("expected a comprehension");
        };

        assert_eq!(variable.lexeme, "x");
        assert!(filter.is_none());
    }

    #[test]
    fn comprehension_with_filter() {
        let Expr::Comprehension { result, filter, .. } = expression("{x * x | x in A, x % 2 == 0}")
        else {
            panic!("expected a comprehension");
        };

        assert_eq!(result.to_string(), "x * x");
        assert_eq!(filter.map(|f| f.to_string()).as_deref(), Some("x % 2 == 0"));
    }

    #[test]
    fn rosters() {
        assert!(matches!(expression("{1, 2, 3}"),
                         Expr::SetLiteral { ref elements } if elements.len() == 3));
        assert!(matches!(expression("{}"),
                         Expr::SetLiteral { ref elements } if elements.is_empty()));
        assert!(matches!(expression("{x}"),
                         Expr::SetLiteral { ref elements } if elements.len() == 1));
    }

    #[test]
    fn membership_in_first_element_is_still_a_roster() {
        assert!(matches!(expression("{x in A, 2}"),
                         Expr::SetLiteral { ref elements } if elements.len() == 2));
    }

    #[test]
    fn malformed_comprehension_head() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let parsed = parse(&scan("print {x | 1 in A};").tokens, &mut diagnostics);

        assert!(parsed.statements.is_empty());
        assert_eq!(diagnostics[0].message,
                   "Expect variable name after '|', found '1'.");
    }
}

use std::borrow::Cow;

use log::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_assignment, statement::parse_declaration},
    },
    report::Reporter,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply expressions may nest before the parser gives up on them.
pub const MAX_NESTING: usize = 100;

/// The result of parsing a whole program.
#[derive(Debug, Default)]
pub struct Parsed {
    /// Every statement that parsed cleanly, in source order.
    pub statements:       Vec<Statement>,
    /// Whether any syntax error was reported.
    pub had_syntax_error: bool,
}

/// Cursor over a token stream that ends with [`TokenKind::Eof`].
///
/// The cursor never moves past the end-marker, so [`ParseState::peek`] always
/// has a token to return.
pub struct ParseState<'t, 'r> {
    tokens:    &'t [Token],
    current:   usize,
    reporter:  &'r mut dyn Reporter,
    had_error: bool,
    depth:     usize,
}

impl<'t, 'r> ParseState<'t, 'r> {
    /// Creates a cursor at the start of `tokens`.
    ///
    /// `tokens` must be non-empty and end with an `Eof` token; [`parse`] takes
    /// care of this for arbitrary input.
    pub(in crate::interpreter::parser) fn new(tokens: &'t [Token],
                                              reporter: &'r mut dyn Reporter)
                                              -> Self {
        Self { tokens,
               current: 0,
               reporter,
               had_error: false,
               depth: 0 }
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &'t Token {
        &self.tokens[self.current]
    }

    /// Whether the cursor sits on the end-marker.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes and returns the current token. The end-marker is returned but
    /// never consumed.
    pub fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Whether the current token has the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub fn matches(&mut self, kinds: &[TokenKind]) -> Option<&'t Token> {
        if kinds.contains(&self.peek().kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of the given kind or fails without consuming.
    ///
    /// # Parameters
    /// - `kind`: The required token kind.
    /// - `expected`: What the grammar wanted, e.g. `Expect ';' after value`.
    ///
    /// # Errors
    /// Returns an error describing the token found instead.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<&'t Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(expected))
        }
    }

    /// Builds the error for an unexpected current token.
    #[must_use]
    pub fn error_at_current(&self, expected: &str) -> ParseError {
        let token = self.peek();
        if token.kind == TokenKind::Eof {
            ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                               line:     token.line, }
        } else {
            ParseError::UnexpectedToken { expected: expected.to_string(),
                                          found:    token.lexeme.clone(),
                                          line:     token.line, }
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING`] levels are open; nothing is
    /// consumed in that case.
    pub fn nested<T>(&mut self,
                     parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        if self.depth == MAX_NESTING {
            return Err(ParseError::NestingTooDeep { max:  MAX_NESTING,
                                                    line: self.peek().line, });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Hands a syntax error to the reporter and remembers that one occurred.
    pub fn report(&mut self, error: &ParseError) {
        debug!("syntax error on line {}: {error}", error.line());
        self.had_error = true;
        self.reporter.syntax_error(error.line(), &error.to_string());
    }

    /// Discards tokens up to the next statement boundary.
    ///
    /// Stops just after a `;`, or before `def`, `let`, `print` or the
    /// end-marker.
    pub fn synchronize(&mut self) {
        trace!("synchronizing from line {}", self.peek().line);
        loop {
            match self.peek().kind {
                TokenKind::Eof | TokenKind::Def | TokenKind::Let | TokenKind::Print => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                },
                _ => {
                    self.advance();
                },
            }
        }
    }
}

/// Parses a whole program.
///
/// Each syntax error is reported through `reporter` as soon as it is found;
/// the parser then skips to the next statement and carries on, so a single
/// call surfaces every independent error. Statements that failed to parse are
/// left out of the result.
///
/// A stream that is empty or lacks its end-marker is treated as if one were
/// appended.
///
/// # Example
/// ```
/// use setta::{interpreter::{lexer::scan, parser::core::parse}, report::Diagnostic};
///
/// let scanned = scan("let a = 1\nlet b = 2;\nprint b;");
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let parsed = parse(&scanned.tokens, &mut diagnostics);
///
/// assert!(parsed.had_syntax_error);
/// assert_eq!(parsed.statements.len(), 2);
/// assert_eq!(diagnostics[0].line, 2);
/// ```
pub fn parse(tokens: &[Token], reporter: &mut dyn Reporter) -> Parsed {
    let tokens = terminated(tokens);
    let mut state = ParseState::new(&tokens, reporter);
    let mut statements = Vec::new();

    while !state.is_at_end() {
        match parse_declaration(&mut state) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                state.report(&error);
                state.synchronize();
            },
        }
    }

    debug!("parsed {} statements (syntax errors: {})",
           statements.len(),
           state.had_error);

    Parsed { statements,
             had_syntax_error: state.had_error }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `state`: The token cursor.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    state.nested(parse_assignment)
}

fn terminated(tokens: &[Token]) -> Cow<'_, [Token]> {
    match tokens.last() {
        Some(last) if last.kind == TokenKind::Eof => Cow::Borrowed(tokens),
        last => {
            let line = last.map_or(1, |token| token.line);
            let mut owned = tokens.to_vec();
            owned.push(Token::new(TokenKind::Eof, "", None, line));
            Cow::Owned(owned)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interpreter::lexer::scan, report::Diagnostic};

    fn parse_str(source: &str) -> (Parsed, Vec<Diagnostic>) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let parsed = parse(&scan(source).tokens, &mut diagnostics);
        (parsed, diagnostics)
    }

    #[test]
    fn empty_stream_parses_to_nothing() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let parsed = parse(&[], &mut diagnostics);

        assert!(parsed.statements.is_empty());
        assert!(!parsed.had_syntax_error);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn missing_end_marker_is_tolerated() {
        let mut tokens = scan("print 1;").tokens;
        tokens.pop();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let parsed = parse(&tokens, &mut diagnostics);

        assert_eq!(parsed.statements.len(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn recovery_resumes_after_semicolon() {
        let (parsed, diagnostics) = parse_str("print (1; print 2;");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expect ')' after expression, found ';'.");
        assert_eq!(parsed.statements.len(), 1);
        assert_eq!(parsed.statements[0].to_string(), "print 2;");
    }

    #[test]
    fn recovery_stops_at_statement_keywords() {
        let (parsed, diagnostics) = parse_str("1 + + let a = 2; def f(x) = x; print a;");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(parsed.statements.len(), 3);
    }

    #[test]
    fn end_of_input_is_named_in_the_message() {
        let (parsed, diagnostics) = parse_str("print 1");

        assert!(parsed.had_syntax_error);
        assert_eq!(diagnostics[0].message,
                   "Expect ';' after value, found end of input.");
    }

    #[test]
    fn runaway_nesting_is_one_syntax_error() {
        let depth = 10_000;
        let source = format!("print {}1{};\nprint 2;", "(".repeat(depth), ")".repeat(depth));
        let (parsed, diagnostics) = parse_str(&source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message,
                   ParseError::NestingTooDeep { max:  MAX_NESTING,
                                                line: 1, }.to_string());
        assert_eq!(parsed.statements.len(), 1);
        assert_eq!(parsed.statements[0].to_string(), "print 2;");
    }

    #[test]
    fn every_recursive_form_is_capped() {
        let deep = 10_000;
        let sources = [format!("print {}1;", "-".repeat(deep)),
                       format!("print {}1{};", "{".repeat(deep), "}".repeat(deep)),
                       format!("print {}A{};", "|".repeat(deep), "|".repeat(deep)),
                       format!("print {}1{};", "f(".repeat(deep), ")".repeat(deep)),
                       format!("{}1;", "a = ".repeat(deep))];

        for source in &sources {
            let (parsed, diagnostics) = parse_str(source);
            assert!(parsed.had_syntax_error);
            assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
            assert!(diagnostics[0].message.contains("nested more than"));
        }
    }

    #[test]
    fn nesting_below_the_cap_parses() {
        let depth = MAX_NESTING - 1;
        let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
        let (parsed, diagnostics) = parse_str(&source);

        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(parsed.statements.len(), 1);
    }
}

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, ParseState},
            unary::parse_unary,
        },
    },
};

type Layer = fn(&mut ParseState<'_, '_>) -> ParseResult<Expr>;

/// Parses an assignment.
///
/// Assignment is right-associative and only a bare variable is a legal
/// target. Any other target is reported, and the left-hand expression is
/// returned so the parse can go on.
///
/// The rule is: `assignment := IDENT "=" assignment | equality`
///
/// # Parameters
/// - `state`: The token cursor.
///
/// # Returns
/// An `Expr::Assign` node, or the plain equality-level expression.
pub fn parse_assignment(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    let expr = parse_equality(state)?;

    let Some(equals) = state.matches(&[TokenKind::Equal]) else {
        return Ok(expr);
    };
    let value = state.nested(parse_assignment)?;

    match expr {
        Expr::Variable { name } => Ok(Expr::Assign { name,
                                                     value: Box::new(value) }),
        other => {
            state.report(&ParseError::InvalidAssignmentTarget { line: equals.line });
            Ok(other)
        },
    }
}

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    fold_left(state,
              &[TokenKind::EqualEqual, TokenKind::BangEqual],
              parse_comparison)
}

/// Parses ordering comparisons and the subset test.
///
/// `subseteq` shares this layer with `<`, `<=`, `>` and `>=`, so
/// `A union B subseteq C` groups the union first.
///
/// The rule is: `comparison := subset (("subseteq" | ">" | ">=" | "<" | "<=")
/// subset)*`
pub fn parse_comparison(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    fold_left(state,
              &[TokenKind::Subseteq,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual],
              parse_membership)
}

/// Parses membership tests.
///
/// The rule is: `subset := union ("in" union)*`
pub fn parse_membership(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    fold_left(state, &[TokenKind::In], parse_union)
}

/// Parses set unions.
///
/// The rule is: `union := intersection ("union" intersection)*`
pub fn parse_union(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    fold_left(state, &[TokenKind::Union], parse_intersection)
}

/// Parses set intersections.
///
/// The rule is: `intersection := difference ("intersect" difference)*`
pub fn parse_intersection(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    fold_left(state, &[TokenKind::Intersect], parse_difference)
}

/// Parses the difference layer.
///
/// The term layer below already consumes every `-` it meets, so this layer
/// never builds a node in practice.
///
/// The rule is: `difference := term ("-" term)*`
pub fn parse_difference(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    fold_left(state, &[TokenKind::Minus], parse_term)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
pub fn parse_term(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    fold_left(state, &[TokenKind::Plus, TokenKind::Minus], parse_factor)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `factor := unary (("*" | "/" | "%") unary)*`
pub fn parse_factor(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    fold_left(state,
              &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
              parse_unary)
}

/// Parses one left-associative layer: `operand (operator operand)*`.
///
/// # Parameters
/// - `state`: The token cursor.
/// - `operators`: Token kinds accepted at this layer.
/// - `operand`: Parser for the next-tighter layer.
///
/// # Returns
/// A left-leaning `Expr::Binary` tree, or the single operand.
fn fold_left(state: &mut ParseState<'_, '_>,
             operators: &[TokenKind],
             operand: Layer)
             -> ParseResult<Expr> {
    let mut left = operand(state)?;
    while operators.contains(&state.peek().kind)
          && let Some(op) = token_to_binary_operator(state.peek().kind)
    {
        let operator = state.advance().clone();
        let right = operand(state)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              operator,
                              right: Box::new(right) };
    }
    Ok(left)
}

/// Maps a token kind to the binary operator it spells, if any.
///
/// # Parameters
/// - `kind`: The token kind to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token is a binary operator, `None`
/// otherwise.
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Union => Some(BinaryOperator::Union),
        TokenKind::Intersect => Some(BinaryOperator::Intersect),
        TokenKind::Subseteq => Some(BinaryOperator::SubsetEq),
        TokenKind::In => Some(BinaryOperator::In),
        _ => None,
    }
}

/// Syntax errors.
///
/// Defines all error types that can occur while scanning or parsing source
/// code: unexpected tokens, invalid assignment targets, overlong argument
/// lists, runaway nesting and malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: operand
/// kind mismatches, unknown names, calls on non-callable values, unsupported
/// constructs and builtin argument failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

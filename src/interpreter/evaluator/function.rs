/// Built-in function implementations.
///
/// Numeric helpers (`sqrt`, `abs`, `floor`, `ceil`), set reductions (`min`,
/// `max`, `sum`) and `assert`.
pub mod builtin;

/// The builtin table, arity checks and call evaluation.
pub mod core;

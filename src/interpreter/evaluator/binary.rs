/// Binary operator dispatch.
///
/// Evaluates both operands left to right and routes the operation by
/// operator.
pub mod core;

/// Arithmetic on numbers.
pub mod scalar;

/// Ordering comparisons.
pub mod comparison;

/// Set algebra and membership.
pub mod set;

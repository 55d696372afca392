/// Set value representation.
///
/// Defines `SetValue`, the insertion-ordered, deduplicated collection behind
/// `Value::Set`. Equality ignores order and the hash is order-independent, so
/// sets can themselves be elements of sets.
pub mod set_value;

/// The `Value` enum, its equality, truthiness and printed form.
pub mod core;

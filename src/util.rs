/// Numeric conversion helpers.
///
/// Converts between integer and floating-point types without silent data
/// loss. Each function returns a `Result` that is `Ok` only if the conversion
/// is lossless.
pub mod num;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// Used to turn element counts into language numbers.
///
/// ## Errors
/// Returns `Unsupported` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use setta::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(100, 1), Ok(100.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, line: usize) -> EvalResult<f64> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(RuntimeError::Unsupported { details: format!("Count {value} is too large to \
                                                               represent exactly."),
                                             line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_convert() {
        assert_eq!(usize_to_f64_checked(0, 1), Ok(0.0));
        assert_eq!(usize_to_f64_checked(3, 1), Ok(3.0));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn counts_beyond_f64_precision_fail() {
        let too_big = usize::try_from(MAX_SAFE_U64_INT + 1).unwrap_or(usize::MAX);

        assert!(matches!(usize_to_f64_checked(too_big, 7),
                         Err(RuntimeError::Unsupported { line: 7, .. })));
    }
}

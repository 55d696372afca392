use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, set_value::SetValue},
    },
};

/// Extracts a number, or fails with `TypeMismatch` carrying `message`.
pub fn expect_number(value: &Value, message: &str, line: usize) -> EvalResult<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::type_mismatch(message, line)),
    }
}

/// Extracts two numbers for a binary operator.
///
/// # Errors
/// `TypeMismatch` ("Operands must be numbers.") if either is not a number.
pub fn expect_numbers(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::type_mismatch("Operands must be numbers.", line)),
    }
}

/// Borrows the set inside a value, or fails with `TypeMismatch` carrying
/// `message`.
pub fn expect_set<'a>(value: &'a Value, message: &str, line: usize) -> EvalResult<&'a SetValue> {
    match value {
        Value::Set(set) => Ok(set),
        _ => Err(RuntimeError::type_mismatch(message, line)),
    }
}

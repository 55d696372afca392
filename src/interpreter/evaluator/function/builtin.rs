use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::{Arity, arity_mismatch},
            utils::{expect_number, expect_numbers, expect_set},
        },
        value::core::Value,
    },
};

/// Applies an `f64` method to a single numeric argument.
///
/// The generated functions accept exactly one argument. Non-numeric
/// arguments produce a `TypeMismatch` error.
///
/// # Example
/// ```
/// use setta::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::from(9.0)], 1), Ok(Value::from(3.0)));
/// ```
macro_rules! numeric_builtin {
    ($fname:ident, $method:ident) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            let [value] = args else {
                return Err(arity_mismatch(Arity::Exact(1), args.len(), line));
            };
            let n = expect_number(value,
                                  concat!("Argument to '", stringify!($fname), "' must be a number."),
                                  line)?;
            Ok(Value::Number(n.$method()))
        }
    };
}

numeric_builtin!(sqrt, sqrt);
numeric_builtin!(abs, abs);
numeric_builtin!(floor, floor);
numeric_builtin!(ceil, ceil);

/// Smallest of two numbers, or of the numbers in one set.
///
/// # Example
/// ```
/// use setta::interpreter::{
///     evaluator::function::builtin::min,
///     value::{core::Value, set_value::SetValue},
/// };
///
/// let set: SetValue = [4.0, 2.0, 9.0].map(Value::from).into_iter().collect();
/// assert_eq!(min(&[Value::from(set)], 1), Ok(Value::from(2.0)));
/// assert_eq!(min(&[Value::from(3.0), Value::from(7.0)], 1), Ok(Value::from(3.0)));
/// ```
pub fn min(args: &[Value], line: usize) -> EvalResult<Value> {
    extremum("min", args, line, f64::min)
}

/// Largest of two numbers, or of the numbers in one set.
pub fn max(args: &[Value], line: usize) -> EvalResult<Value> {
    extremum("max", args, line, f64::max)
}

fn extremum(name: &str, args: &[Value], line: usize, pick: fn(f64, f64) -> f64) -> EvalResult<Value> {
    match args {
        [a, b] => {
            let (a, b) = expect_numbers(a, b, line)?;
            Ok(Value::Number(pick(a, b)))
        },
        [set] => {
            let set = expect_set(set,
                                 &format!("Argument to '{name}' must be a set or two numbers."),
                                 line)?;
            let message = format!("Elements passed to '{name}' must be numbers.");
            let mut numbers = set.iter().map(|v| expect_number(v, &message, line));

            let first = numbers.next()
                               .ok_or_else(|| RuntimeError::InvalidArgument {
                                   details: format!("'{name}' of an empty set."),
                                   line,
                               })??;
            numbers.try_fold(first, |acc, n| n.map(|n| pick(acc, n)))
                   .map(Value::Number)
        },
        _ => Err(arity_mismatch(Arity::OneOf(&[1, 2]), args.len(), line)),
    }
}

/// Sum of the numbers in a set; the empty set sums to `0`.
pub fn sum(args: &[Value], line: usize) -> EvalResult<Value> {
    let [set] = args else {
        return Err(arity_mismatch(Arity::Exact(1), args.len(), line));
    };
    let set = expect_set(set, "Argument to 'sum' must be a set.", line)?;

    set.iter()
       .try_fold(0.0, |acc, v| {
           expect_number(v, "Elements passed to 'sum' must be numbers.", line).map(|n| acc + n)
       })
       .map(Value::Number)
}

/// Fails with `AssertionFailed` unless the argument is truthy.
///
/// # Example
/// ```
/// use setta::{
///     error::RuntimeError,
///     interpreter::{evaluator::function::builtin::assert_fn, value::core::Value},
/// };
///
/// assert_eq!(assert_fn(&[Value::from(true)], 1), Ok(Value::Nil));
/// assert_eq!(assert_fn(&[Value::Nil], 5), Err(RuntimeError::AssertionFailed { line: 5 }));
/// ```
pub fn assert_fn(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = args else {
        return Err(arity_mismatch(Arity::Exact(1), args.len(), line));
    };
    if value.is_truthy() {
        Ok(Value::Nil)
    } else {
        Err(RuntimeError::AssertionFailed { line })
    }
}

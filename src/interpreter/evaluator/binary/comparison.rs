use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::expect_numbers,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `<`, `<=`, `>` or `>=` on two numbers.
    ///
    /// Any comparison involving NaN is false.
    ///
    /// # Example
    /// ```
    /// use setta::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_ordering(BinaryOperator::Less, &Value::from(3.0), &Value::from(5.0), 1);
    ///
    /// assert_eq!(result, Ok(Value::from(true)));
    /// ```
    pub fn eval_ordering(op: BinaryOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        let (a, b) = expect_numbers(left, right, line)?;
        let result = match op {
            BinaryOperator::Less => a < b,
            BinaryOperator::LessEqual => a <= b,
            BinaryOperator::Greater => a > b,
            BinaryOperator::GreaterEqual => a >= b,
            _ => {
                return Err(RuntimeError::type_mismatch(format!("'{op}' is not an ordering \
                                                                operator."),
                                                       line));
            },
        };
        Ok(Value::Bool(result))
    }
}

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
    /// Evaluates `+ - * / %` on two numbers.
    ///
    /// Division and remainder by zero follow IEEE-754 and yield infinity or
    /// NaN rather than an error. `%` takes the sign of the dividend.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The numeric result, or `TypeMismatch` if either operand is not a
    /// number.
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let (a, b) = expect_numbers(left, right, line)?;
        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => a / b,
            BinaryOperator::Mod => a % b,
            _ => {
                return Err(RuntimeError::type_mismatch(format!("'{op}' is not an arithmetic \
                                                                operator."),
                                                       line));
            },
        };
        Ok(Value::Number(result))
    }
}

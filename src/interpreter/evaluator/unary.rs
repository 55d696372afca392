use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::expect_number,
        },
        lexer::Token,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates the operand of a unary node, then applies the operator.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operator: &Token,
                                expr: &Expr)
                                -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Self::eval_unary(op, &value, operator.line)
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation; any other operand is a `TypeMismatch`.
    /// - `Not`: negated truthiness, for any value.
    ///
    /// # Example
    /// ```
    /// use setta::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::from(5.0), 1);
    /// assert_eq!(v, Ok(Value::from(-5.0)));
    ///
    /// // `nil` is falsy.
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Nil, 1);
    /// assert_eq!(v, Ok(Value::from(true)));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                Ok(Value::Number(-expect_number(value, "Operand must be a number.", line)?))
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RuntimeError, interpreter::value::set_value::SetValue};

    #[test]
    fn not_uses_truthiness() {
        let empty = Value::from(SetValue::new());

        assert_eq!(Context::eval_unary(UnaryOperator::Not, &empty, 1), Ok(Value::from(true)));
        assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::from(0.0), 1),
                   Ok(Value::from(false)));
    }

    #[test]
    fn negating_a_boolean_is_a_mismatch() {
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::from(true), 6),
                   Err(RuntimeError::type_mismatch("Operand must be a number.", 6)));
    }
}

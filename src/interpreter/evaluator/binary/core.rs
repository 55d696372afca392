use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Token,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates both operands of a binary node, left first, then applies the
    /// operator.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 operator: &Token,
                                 right: &Expr)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, operator.line)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic and ordering need two numbers, set algebra needs two sets,
    /// `in` needs a set on the right, and equality accepts anything.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use setta::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::from(3.0), &Value::from(4.0), 1);
    /// assert_eq!(result, Ok(Value::from(7.0)));
    ///
    /// let mismatch = Context::eval_binary(BinaryOperator::Add, &Value::from(1.0), &Value::from(true), 1);
    /// assert!(mismatch.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, In, Intersect, Less, LessEqual, Mod, Mul,
            NotEqual, Sub, SubsetEq, Union,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, line),
            Less | LessEqual | Greater | GreaterEqual => Self::eval_ordering(op, left, right, line),
            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),
            Union | Intersect | SubsetEq => Self::eval_set_op(op, left, right, line),
            In => Self::eval_membership(left, right, line),
        }
    }
}

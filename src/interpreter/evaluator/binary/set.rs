use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::expect_set,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a set operation on two sets.
    ///
    /// Supported operators map to standard set operations:
    /// - `Union` produces the union, left operand's elements first.
    /// - `Intersect` produces the intersection, in the left operand's order.
    /// - `SubsetEq` tests whether every element of the left is in the right.
    ///
    /// # Parameters
    /// - `op`: The set operator.
    /// - `left`: Left-hand value.
    /// - `right`: Right-hand value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// A new set, or a boolean for `SubsetEq`. Non-set operands are a
    /// `TypeMismatch`.
    pub fn eval_set_op(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        let a = expect_set(left, "Operands must be sets.", line)?;
        let b = expect_set(right, "Operands must be sets.", line)?;

        match op {
            BinaryOperator::Union => Ok(Value::from(a.union(b))),
            BinaryOperator::Intersect => Ok(Value::from(a.intersection(b))),
            BinaryOperator::SubsetEq => Ok(Value::Bool(a.is_subset(b))),
            _ => Err(RuntimeError::type_mismatch(format!("'{op}' is not a set operator."), line)),
        }
    }

    /// Evaluates `element in set`. Any value may be tested for membership.
    pub fn eval_membership(element: &Value, set: &Value, line: usize) -> EvalResult<Value> {
        let set = expect_set(set, "Right operand must be a set for 'in'.", line)?;
        Ok(Value::Bool(set.contains(element)))
    }
}

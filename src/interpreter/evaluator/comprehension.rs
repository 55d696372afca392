use log::trace;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::expect_set,
        },
        lexer::Token,
        value::{core::Value, set_value::SetValue},
    },
};

impl Context {
    /// Evaluates a set comprehension `{ result | variable in domain, filter }`.
    ///
    /// The domain must be a set; a non-set domain is reported at the bound
    /// variable's line. For each domain element, in iteration order, the loop
    /// variable is defined in the environment, the filter (if any) is checked
    /// for truthiness, and the result expression is inserted into the output
    /// set.
    ///
    /// The loop variable is written into the flat environment with `define`
    /// and is not restored afterwards: after the comprehension it holds the
    /// last domain element, replacing any earlier binding of that name. An
    /// empty domain leaves the environment untouched.
    ///
    /// # Parameters
    /// - `result`: Expression producing each output element.
    /// - `variable`: The bound variable's token.
    /// - `domain`: Expression producing the set to iterate.
    /// - `filter`: Optional predicate.
    ///
    /// # Returns
    /// The collected set, deduplicated in first-produced order.
    pub(crate) fn eval_comprehension(&mut self,
                                     result: &Expr,
                                     variable: &Token,
                                     domain: &Expr,
                                     filter: Option<&Expr>)
                                     -> EvalResult<Value> {
        let domain = self.eval(domain)?;
        let domain = expect_set(&domain, "Right operand of 'in' must be a set.", variable.line)?;
        trace!("comprehension over {} elements bound to '{}'",
               domain.len(),
               variable.lexeme);

        let mut output = SetValue::new();
        for element in domain {
            self.environment.define(&variable.lexeme, element.clone());

            if let Some(filter) = filter
               && !self.eval(filter)?.is_truthy()
            {
                continue;
            }
            output.insert(self.eval(result)?);
        }

        Ok(Value::from(output))
    }
}

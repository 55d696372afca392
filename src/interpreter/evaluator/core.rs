use log::{debug, trace};

use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{function::core::BUILTIN_TABLE, utils::expect_set},
        lexer::Token,
        value::{core::Value, set_value::SetValue},
    },
    report::{OutputSink, Reporter},
    util::num::usize_to_f64_checked,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment, with
/// the builtin functions bound in it from the start.
///
/// ## Usage
///
/// `Context` is created once per file run, or once per REPL session so that
/// bindings carry over from one line to the next. All evaluation methods
/// (like `eval()` and `execute()`) resolve names through it.
#[derive(Debug, Clone)]
pub struct Context {
    /// The flat name → value table.
    pub environment: Environment,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context with only the builtins bound.
    #[must_use]
    pub fn new() -> Self {
        let mut environment = Environment::new();
        for builtin in BUILTIN_TABLE {
            environment.define(builtin.name, Value::Callable(builtin));
        }
        Self { environment }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variables, grouping,
    /// unary and binary operations, set rosters and comprehensions,
    /// cardinality, calls and assignments.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// The first runtime error met; evaluation stops there.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Self::eval_literal(value)),
            Expr::Variable { name } => self.environment.get(name),
            Expr::Grouping { expr } => self.eval(expr),
            Expr::Unary { op, operator, expr } => self.eval_unary_op(*op, operator, expr),
            Expr::Binary { left,
                           op,
                           operator,
                           right, } => self.eval_binary_op(left, *op, operator, right),
            Expr::SetLiteral { elements } => self.eval_set_literal(elements),
            Expr::Comprehension { result,
                                  variable,
                                  domain,
                                  filter, } => {
                self.eval_comprehension(result, variable, domain, filter.as_deref())
            },
            Expr::Cardinality { pipe, expr } => self.eval_cardinality(pipe, expr),
            Expr::Call { callee,
                         paren,
                         arguments, } => self.eval_call(callee, paren, arguments),
            Expr::Assign { name, value } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            },
        }
    }

    /// Executes a single statement.
    ///
    /// `print` writes one line to `output`; `let` defines its name; an
    /// expression statement is evaluated and its value dropped. Function
    /// declarations are not supported at runtime.
    ///
    /// # Errors
    /// Any runtime error raised while evaluating the statement.
    pub fn execute(&mut self, statement: &Statement, output: &mut dyn OutputSink) -> EvalResult<()> {
        trace!("executing `{statement}`");
        match statement {
            Statement::Print { expr } => {
                let value = self.eval(expr)?;
                output.print_line(&value.to_string());
            },
            Statement::Let { name, initializer } => {
                let value = self.eval(initializer)?;
                self.environment.define(&name.lexeme, value);
            },
            Statement::Expression { expr } => {
                self.eval(expr)?;
            },
            Statement::Function(def) => {
                return Err(RuntimeError::Unsupported { details:
                                                           format!("Function declarations are \
                                                                    not supported: '{}'.",
                                                                   def.name.lexeme),
                                                       line:    def.name.line, });
            },
        }
        Ok(())
    }

    /// Runs statements in order, stopping at the first runtime error.
    ///
    /// The error is handed to `reporter` and later statements are skipped.
    ///
    /// # Returns
    /// Whether a runtime error occurred.
    pub fn interpret(&mut self,
                     statements: &[Statement],
                     output: &mut dyn OutputSink,
                     reporter: &mut dyn Reporter)
                     -> bool {
        for statement in statements {
            if let Err(error) = self.execute(statement, output) {
                debug!("runtime error on line {}: {error}", error.line());
                reporter.runtime_error(&error.to_string(), error.line());
                return true;
            }
        }
        false
    }

    fn eval_literal(value: &LiteralValue) -> Value {
        Value::from(value)
    }

    /// Builds a set from a roster, evaluating elements left to right.
    fn eval_set_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let mut set = SetValue::new();
        for element in elements {
            set.insert(self.eval(element)?);
        }
        Ok(Value::from(set))
    }

    /// Evaluates `|expr|` to the number of elements in a set.
    fn eval_cardinality(&mut self, pipe: &Token, expr: &Expr) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        let set = expect_set(&value, "Operand must be a set for cardinality.", pipe.line)?;
        Ok(Value::Number(usize_to_f64_checked(set.len(), pipe.line)?))
    }
}

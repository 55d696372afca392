use std::fmt;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::builtin,
        },
        lexer::Token,
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number
/// of the call.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => {
                let counts: Vec<String> = counts.iter().map(ToString::to_string).collect();
                write!(f, "{}", counts.join(" or "))
            },
        }
    }
}

/// A native function bound in every new [`Context`].
pub struct Builtin {
    /// The global name the builtin is bound to.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    func:      BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Builtin {
    /// Checks the argument count and runs the builtin.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` for a wrong count, otherwise whatever the
    /// builtin raises.
    pub fn call(&self, args: &[Value], line: usize) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            return Err(arity_mismatch(self.arity, args.len(), line));
        }
        (self.func)(args, line)
    }
}

/// Builds the `ArgumentCountMismatch` error for an arity.
pub(crate) fn arity_mismatch(arity: Arity, found: usize, line: usize) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { expected: arity.to_string(),
                                          found,
                                          line }
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, the static table bound into every new
/// context.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub(crate) static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "sqrt"   => { arity: Arity::Exact(1), func: builtin::sqrt },
    "abs"    => { arity: Arity::Exact(1), func: builtin::abs },
    "floor"  => { arity: Arity::Exact(1), func: builtin::floor },
    "ceil"   => { arity: Arity::Exact(1), func: builtin::ceil },
    "min"    => { arity: Arity::OneOf(&[1, 2]), func: builtin::min },
    "max"    => { arity: Arity::OneOf(&[1, 2]), func: builtin::max },
    "sum"    => { arity: Arity::Exact(1), func: builtin::sum },
    "assert" => { arity: Arity::Exact(1), func: builtin::assert_fn },
}

impl Context {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// Only builtins are callable.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `paren`: The closing parenthesis, used for error lines.
    /// - `arguments`: Argument expressions.
    ///
    /// # Returns
    /// The function result, `NotCallable` if the callee is not a function, or
    /// `ArgumentCountMismatch` on a wrong argument count.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            paren: &Token,
                            arguments: &[Expr])
                            -> EvalResult<Value> {
        let callee = self.eval(callee)?;
        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        match callee {
            Value::Callable(builtin) => builtin.call(&args, paren.line),
            _ => Err(RuntimeError::NotCallable { line: paren.line }),
        }
    }
}

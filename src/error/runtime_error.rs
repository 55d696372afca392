use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// The first four variants are the language's core failure modes; the rest
/// are raised by builtin callables. Every variant carries its source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An operator received an operand of the wrong kind.
    #[error("{details}")]
    TypeMismatch {
        /// Details about the mismatch, e.g. `Operands must be numbers.`
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Read or assignment of a name that was never defined.
    #[error("Undefined variable '{name}'.")]
    UndefinedName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not callable.
    #[error("Can only call functions.")]
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Evaluated a construct that parses but has no runtime semantics.
    #[error("{details}")]
    Unsupported {
        /// What was not supported.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A builtin received the wrong number of arguments.
    #[error("Expected {expected} arguments but got {found}.")]
    ArgumentCountMismatch {
        /// The arity of the callee, e.g. `1` or `1 or 2`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A builtin received an argument of the right kind but outside its
    /// domain.
    #[error("Invalid argument: {details}")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `assert` was called with a falsy value.
    #[error("Assertion failed.")]
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TypeMismatch { line, .. }
            | Self::UndefinedName { line, .. }
            | Self::NotCallable { line }
            | Self::Unsupported { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::InvalidArgument { line, .. }
            | Self::AssertionFailed { line } => *line,
        }
    }

    /// Shorthand for a [`RuntimeError::TypeMismatch`].
    pub(crate) fn type_mismatch(details: impl Into<String>, line: usize) -> Self {
        Self::TypeMismatch { details: details.into(),
                             line }
    }
}

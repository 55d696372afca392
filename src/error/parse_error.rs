use thiserror::Error;

/// Represents all errors that can occur during scanning or parsing.
///
/// Every variant carries the source line it was raised on. The `Display`
/// output is the bare message; the reporter decides how the line is shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    #[error("{expected}, found '{found}'.")]
    UnexpectedToken {
        /// What the parser was looking for, e.g. `Expected ';' after value`.
        expected: String,
        /// The lexeme that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end-marker while the grammar still required a token.
    #[error("{expected}, found end of input.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The left-hand side of `=` is not a bare variable.
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call site passes more than the maximum number of arguments.
    #[error("Can't have more than {max} arguments.")]
    TooManyArguments {
        /// The argument cap.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression nests deeper than the parser allows.
    #[error("Expression nested more than {max} levels deep.")]
    NestingTooDeep {
        /// The nesting cap.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A number literal does not fit in a double.
    #[error("Number literal '{lexeme}' is too large.")]
    NumberOutOfRange {
        /// The literal as written.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The scanner met a character that starts no token.
    #[error("Unexpected character '{lexeme}'.")]
    UnexpectedCharacter {
        /// The offending text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A string literal has no closing quote.
    #[error("Unterminated string.")]
    UnterminatedString {
        /// The source line where the string starts.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error was raised on.
    ///
    /// ## Example
    /// ```
    /// use setta::error::ParseError;
    ///
    /// let err = ParseError::InvalidAssignmentTarget { line: 4 };
    /// assert_eq!(err.line(), 4);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::TooManyArguments { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::NumberOutOfRange { line, .. }
            | Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line } => *line,
        }
    }
}

//! # setta
//!
//! setta is a small expression language over finite sets, written in Rust.
//! It scans, parses and evaluates programs made of `let`, `print` and
//! expression statements, with arithmetic, comparisons, set algebra
//! (`union`, `intersect`, `subseteq`, `in`), set comprehensions and
//! cardinality.
//!
//! ```
//! use setta::{Context, RunStatus, run};
//!
//! let mut context = Context::new();
//! let mut output: Vec<String> = Vec::new();
//! let mut diagnostics: Vec<setta::report::Diagnostic> = Vec::new();
//!
//! let status = run("let A = {1,2,3,4,5}; print {x * x | x in A};",
//!                  &mut context,
//!                  &mut output,
//!                  &mut diagnostics);
//!
//! assert_eq!(status, RunStatus::Ok);
//! assert_eq!(output, ["{1,4,9,16,25}"]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::{debug, info};

pub use crate::interpreter::{
    evaluator::core::Context,
    lexer::scan,
    parser::core::{Parsed, parse},
};
use crate::{
    ast::Statement,
    report::{OutputSink, Reporter},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps operator and name tokens on nodes for error reporting.
/// - Prints trees back as source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during scanning, parsing
/// or evaluating code. Every error carries the source line it was raised on.
///
/// # Responsibilities
/// - Defines error enums for both failure families (syntax, runtime).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment, evaluation and
/// value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Sinks for diagnostics and printed output.
///
/// The parser and evaluator never write to the terminal themselves; they hand
/// errors to a `Reporter` and printed lines to an `OutputSink`.
pub mod report;
/// General utilities for safe numeric conversion.
pub mod util;

/// How a call to [`run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every statement ran.
    Ok,
    /// Scanning or parsing reported at least one error; nothing ran.
    SyntaxError,
    /// Evaluation stopped at a runtime error.
    RuntimeError,
}

/// Scans and parses source text.
///
/// Lexical errors are reported first, then syntax errors, each through
/// `reporter`. `had_syntax_error` covers both.
pub fn parse_source(source: &str, reporter: &mut dyn Reporter) -> Parsed {
    let scanned = scan(source);
    for error in &scanned.errors {
        reporter.syntax_error(error.line(), &error.to_string());
    }

    let mut parsed = parse(&scanned.tokens, reporter);
    parsed.had_syntax_error |= !scanned.errors.is_empty();
    parsed
}

/// Runs statements against `context`, stopping at the first runtime error.
///
/// # Returns
/// Whether a runtime error occurred.
pub fn evaluate(statements: &[Statement],
                context: &mut Context,
                output: &mut dyn OutputSink,
                reporter: &mut dyn Reporter)
                -> bool {
    context.interpret(statements, output, reporter)
}

/// Scans, parses and evaluates a program.
///
/// Nothing is evaluated if any syntax error was reported. Bindings made by
/// the program stay in `context`, so several runs can share one session.
///
/// # Examples
/// ```
/// use setta::{Context, RunStatus, report::Diagnostic, run};
///
/// let mut context = Context::new();
/// let mut output: Vec<String> = Vec::new();
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// // A type mismatch stops the run before anything is printed.
/// let status = run("print 1 + true;", &mut context, &mut output, &mut diagnostics);
/// assert_eq!(status, RunStatus::RuntimeError);
/// assert!(output.is_empty());
///
/// // A syntax error stops the run before evaluation.
/// let status = run("print 1", &mut context, &mut output, &mut diagnostics);
/// assert_eq!(status, RunStatus::SyntaxError);
/// ```
pub fn run(source: &str,
           context: &mut Context,
           output: &mut dyn OutputSink,
           reporter: &mut dyn Reporter)
           -> RunStatus {
    let parsed = parse_source(source, reporter);
    if parsed.had_syntax_error {
        info!("not evaluating: syntax errors reported");
        return RunStatus::SyntaxError;
    }

    debug!("evaluating {} statements", parsed.statements.len());
    if evaluate(&parsed.statements, context, output, reporter) {
        RunStatus::RuntimeError
    } else {
        RunStatus::Ok
    }
}

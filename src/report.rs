use std::io::{self, Write};

/// Receives diagnostics from the parser and the evaluator.
///
/// Syntax errors take `(line, message)` and runtime errors take
/// `(message, line)`; the reporter decides how either is shown.
pub trait Reporter {
    /// Called once per syntax error, in source order.
    fn syntax_error(&mut self, line: usize, message: &str);
    /// Called for the runtime error that ended a run.
    fn runtime_error(&mut self, message: &str, line: usize);
}

/// Receives the lines produced by `print` statements.
pub trait OutputSink {
    /// Emits one printed line, without its terminator.
    fn print_line(&mut self, line: &str);
}

/// Writes diagnostics to standard error as `Error on line N: message`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn syntax_error(&mut self, line: usize, message: &str) {
        eprintln!("Error on line {line}: {message}");
    }

    fn runtime_error(&mut self, message: &str, line: usize) {
        eprintln!("Error on line {line}: {message}");
    }
}

/// Writes printed lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn print_line(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        if writeln!(stdout, "{line}").is_err() {
            log::warn!("failed to write to stdout");
        }
    }
}

/// Which phase raised a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Scanning or parsing.
    Syntax,
    /// Evaluation.
    Runtime,
}

/// A diagnostic recorded by the collecting reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The phase that raised it.
    pub phase:   Phase,
    /// The source line.
    pub line:    usize,
    /// The message text.
    pub message: String,
}

impl Reporter for Vec<Diagnostic> {
    fn syntax_error(&mut self, line: usize, message: &str) {
        self.push(Diagnostic { phase: Phase::Syntax,
                               line,
                               message: message.to_string() });
    }

    fn runtime_error(&mut self, message: &str, line: usize) {
        self.push(Diagnostic { phase: Phase::Runtime,
                               line,
                               message: message.to_string() });
    }
}

impl OutputSink for Vec<String> {
    fn print_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

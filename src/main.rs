use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use log::{debug, warn};
use rustyline::{DefaultEditor, error::ReadlineError};
use setta::{
    Context, RunStatus, parse_source,
    report::{StderrReporter, StdoutSink},
    run,
};

/// Exit code for a script with syntax errors.
const EXIT_SYNTAX_ERROR: u8 = 65;
/// Exit code for a script that could not be read.
const EXIT_NO_INPUT: u8 = 66;
/// Exit code for a script that failed at runtime.
const EXIT_RUNTIME_ERROR: u8 = 70;

/// setta is a small expression language for working with finite sets.
///
/// Runs a script file, or starts an interactive prompt when no script is
/// given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the parsed program instead of running it.
    #[arg(long)]
    ast: bool,

    /// The script to run. Without one, an interactive prompt starts.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match &args.script {
        Some(path) => run_file(path, args.ast),
        None => {
            run_prompt(args.ast);
            ExitCode::SUCCESS
        },
    }
}

fn run_file(path: &Path, ast: bool) -> ExitCode {
    let Ok(source) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::from(EXIT_NO_INPUT);
    };
    debug!("running {}", path.display());

    let status = if ast {
        print_ast(&source)
    } else {
        run(&source, &mut Context::new(), &mut StdoutSink, &mut StderrReporter)
    };

    match status {
        RunStatus::Ok => ExitCode::SUCCESS,
        RunStatus::SyntaxError => ExitCode::from(EXIT_SYNTAX_ERROR),
        RunStatus::RuntimeError => ExitCode::from(EXIT_RUNTIME_ERROR),
    }
}

/// Reads lines until end of input. One context is kept for the whole session
/// so earlier bindings stay visible; errors are reported and the prompt
/// continues.
fn run_prompt(ast: bool) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the prompt: {e}");
            return;
        },
    };
    let mut context = Context::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    warn!("history not updated: {e}");
                }
                if ast {
                    print_ast(&line);
                } else {
                    run(&line, &mut context, &mut StdoutSink, &mut StderrReporter);
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }
    }
}

fn print_ast(source: &str) -> RunStatus {
    let parsed = parse_source(source, &mut StderrReporter);
    for statement in &parsed.statements {
        println!("{statement}");
    }
    if parsed.had_syntax_error {
        RunStatus::SyntaxError
    } else {
        RunStatus::Ok
    }
}

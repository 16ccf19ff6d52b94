use std::{fs, process::ExitCode, time::Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use num_bigint::BigInt;
use rustyline::{DefaultEditor, error::ReadlineError};
use whilelang::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, Outcome},
        value::{core::Value, namespace::Namespace},
    },
    parse,
};

const PROMPT: &str = ">> ";

/// Runs WHILE programs. Without a file or a command, starts an interactive
/// session.
#[derive(Parser, Debug)]
#[command(name = "while", version, about, long_about = None)]
struct Args {
    /// Runs SOURCE instead of reading a file.
    #[arg(short, long, value_name = "SOURCE")]
    command: Option<String>,

    /// Does not print the run time and the final variables.
    #[arg(short, long)]
    quiet: bool,

    /// The script to run.
    file: Option<String>,

    /// Booleans and natural numbers passed to the program as `_arg0`,
    /// `_arg1`, ...
    args: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let (source, arguments) = match (args.command, args.file) {
        (Some(command), first) => (command, first.into_iter().chain(args.args).collect()),
        (None, Some(path)) => {
            let source =
                fs::read_to_string(&path).with_context(|| {
                                             format!("Failed to read the input file '{path}'.")
                                         })?;
            (source, args.args)
        },
        (None, None) => {
            run_repl()?;
            return Ok(ExitCode::SUCCESS);
        },
    };

    let namespace = match seed_arguments(&arguments) {
        Ok(namespace) => namespace,
        Err(argument) => {
            eprintln!("Invalid argument '{argument}'");
            eprintln!("Only booleans and integers may be passed this way.");
            return Ok(ExitCode::from(2));
        },
    };

    Ok(run_script(&source, namespace, args.quiet))
}

/// Binds each command line argument to `_arg0`, `_arg1`, ...
///
/// Returns the first argument that is neither a boolean nor a natural
/// number as the error.
fn seed_arguments(arguments: &[String]) -> Result<Namespace, &str> {
    let mut namespace = Namespace::new();
    for (n, argument) in arguments.iter().enumerate() {
        let value = match argument.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                digits.parse::<BigInt>().map(Value::Integer).map_err(|_| digits)?
            },
            other => return Err(other),
        };
        namespace.insert(format!("_arg{n}"), value);
    }
    Ok(namespace)
}

fn run_script(source: &str, namespace: Namespace, quiet: bool) -> ExitCode {
    let program = match parse(source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let start = Instant::now();
    let (namespace, outcome) = whilelang::run(&program, namespace);
    let elapsed = start.elapsed();

    if let Outcome::Failed(e) = outcome {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if !quiet {
        println!("Completed in {}ms", elapsed.as_secs_f64() * 1000.0);
        for (name, value) in namespace.iter().filter(|(name, _)| !name.starts_with('_')) {
            println!("{name} := {value}");
        }
    }
    ExitCode::SUCCESS
}

/// Points at `column` of the line typed after the prompt.
fn caret_line(column: usize) -> String {
    format!("{}^", " ".repeat(PROMPT.chars().count() + column.saturating_sub(1)))
}

fn run_repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut context = Context::new();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let program = match parse(&line) {
                    Ok(program) => program,
                    Err(e) => {
                        eprintln!("{}", caret_line(e.position().column));
                        eprintln!("{e}");
                        continue;
                    },
                };
                if matches!(&program, Node::Suite(statements) if statements.is_empty()) {
                    continue;
                }
                match context.run(&program) {
                    Outcome::Completed(Some(value)) => println!("{value}"),
                    Outcome::Completed(None) => {},
                    Outcome::Terminated => break,
                    Outcome::Failed(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

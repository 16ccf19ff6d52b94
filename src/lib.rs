//! # whilelang
//!
//! whilelang is an interpreter for WHILE, the small imperative language used
//! to teach computability. Programs assign integers and booleans to
//! variables, branch with `if` and loop with `while`.
//!
//! Besides running programs, the crate maps every program in the canonical
//! subset of the language to a natural number (its Gödel number) and back.
//! The `@numeric`, `@from_numeric`, `@run_numeric` and `@eval` directives
//! expose this inside the language itself, so programs can compute with
//! other programs.
//!
//! ```
//! use whilelang::{get_result, interpreter::value::{core::Value, namespace::Namespace}};
//!
//! let (namespace, _) = get_result("x := 0; while x < 3 do x := x + 1", Namespace::new()).unwrap();
//!
//! assert_eq!(namespace.get("x"), Some(&Value::from(3)));
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

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, Outcome},
        lexer::tokenize,
        parser::core::parse_program,
        value::namespace::Namespace,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents statements and
/// expressions as a tree, together with the operator enums. The tree is built
/// by the parser, run by the evaluator, rendered back to source by `Display`
/// and numbered by [`numeric`].
pub mod ast;
/// Provides unified error types for parsing, evaluation and Gödel numbering.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches positions and names for context.
/// - Implements `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// Gödel numbering: trees to natural numbers and back.
pub mod numeric;
/// General helpers for big number conversions.
pub mod util;

/// Parses source code into a program tree.
///
/// # Errors
/// Returns the first lexing or parsing error.
///
/// # Example
/// ```
/// use whilelang::parse;
///
/// let program = parse("x := 2 * y").unwrap();
/// assert_eq!(program.to_string(), "x := 2 * y");
///
/// assert!(parse("x := ").is_err());
/// ```
pub fn parse(source: &str) -> Result<Node, ParseError> {
    parse_program(&tokenize(source)?)
}

/// Runs a program against `namespace`, writing directive output to standard
/// output.
///
/// Returns the namespace as the program left it, together with how the run
/// ended. Assignments made before an error or `@exit` are kept.
pub fn run(program: &Node, namespace: Namespace) -> (Namespace, Outcome) {
    let mut context = Context::with_namespace(namespace);
    let outcome = context.run(program);
    (context.namespace, outcome)
}

/// Parses and runs `source` against `namespace`.
///
/// # Errors
/// Returns an error if the source does not parse; nothing is run in that
/// case. Runtime errors are reported through [`Outcome::Failed`].
///
/// # Examples
/// ```
/// use whilelang::{
///     get_result,
///     interpreter::{evaluator::core::Outcome, value::namespace::Namespace},
/// };
///
/// let (_, outcome) = get_result("x := 1 / 0", Namespace::new()).unwrap();
/// assert!(matches!(outcome, Outcome::Failed(_)));
///
/// assert!(get_result("x := := 1", Namespace::new()).is_err());
/// ```
pub fn get_result(source: &str,
                  namespace: Namespace)
                  -> Result<(Namespace, Outcome), ParseError> {
    let program = parse(source)?;
    Ok(run(&program, namespace))
}

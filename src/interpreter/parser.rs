/// Parser entry points and suites.
///
/// Contains the program rule, statement sequences and the shared
/// `ParseResult` type.
pub mod core;

/// Statement parsing.
///
/// Implements `skip`, `if`, `while`, assignments and expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence level, from `|` down to `*` and `/`. Every
/// level is left-associative.
pub mod binary;

/// Factor parsing.
///
/// Handles the negation prefix, literals, names, parenthesised expressions
/// and directives.
pub mod unary;

/// Utility functions for the parser.
///
/// Token lookahead and the `expect` helpers shared by every rule.
pub mod utils;

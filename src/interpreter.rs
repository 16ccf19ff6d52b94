/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages the namespace and
/// carries out directives. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every node kind, including control flow and directives.
/// - Reports runtime errors such as division by zero or type mismatches.
/// - Unwinds on `@exit` without treating it as an error.
pub mod evaluator;
/// The help text printed by `@help`.
pub mod help;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, name, keyword, boolean, directive or symbol,
/// paired with its line and column.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Skips whitespace and `#` comments while tracking lines.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the tree of statements and expressions that the evaluator and the Gödel
/// numbering work on.
///
/// # Responsibilities
/// - Converts tokens into [`Node`](crate::ast::Node) trees.
/// - Validates the grammar, reporting errors with their position.
/// - Encodes operator precedence and associativity.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a WHILE program computes with (integers,
/// booleans and code) and the namespace that stores them.
///
/// # Responsibilities
/// - Defines the `Value` enum and its conversions.
/// - Checks operand types for the evaluator.
/// - Provides the insertion-ordered `Namespace`.
pub mod value;

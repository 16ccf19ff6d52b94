/// Binary operator evaluation logic.
///
/// Handles arithmetic, equality, ordering comparisons and the short-circuit
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the dispatch over node kinds, control
/// flow and the conversion of a finished run into an [`core::Outcome`].
pub mod core;

/// Directive evaluation.
///
/// Implements the `@`-directives: tracing and printing variables, resetting
/// the namespace, help, and the Gödel numbering directives.
pub mod directive;

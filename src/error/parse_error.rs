use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the [`Position`] of the offending input, and every
/// message starts with `Error on line {line}, column {column}:`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contains a character that does not start any token.
    #[error("Error on line {}, column {}: Unexpected character '{lexeme}'.",
            .position.line, .position.column)]
    UnexpectedCharacter {
        /// The text that could not be tokenized.
        lexeme:   String,
        /// Where it occurred.
        position: Position,
    },
    /// Found a token other than the ones the grammar allows here.
    #[error("Error on line {}, column {}: Expected {expected}, found {found}.",
            .position.line, .position.column)]
    UnexpectedToken {
        /// Description of what would have been accepted.
        expected: String,
        /// The token actually found, rendered with its kind.
        found:    String,
        /// Where it occurred.
        position: Position,
    },
    /// An `@name` that is not one of the known directives.
    #[error("Error on line {}, column {}: Unknown directive '@{name}'.",
            .position.line, .position.column)]
    UnknownDirective {
        /// The directive name without `@`.
        name:     String,
        /// Where it occurred.
        position: Position,
    },
    /// A numeric mode other than `a`, `b` or `stmt`.
    #[error("Error on line {}, column {}: Unknown numeric mode '{mode}'. Expected one of a, b, stmt.",
            .position.line, .position.column)]
    UnknownNumericMode {
        /// The mode as written.
        mode:     String,
        /// Where it occurred.
        position: Position,
    },
}

impl ParseError {
    /// Returns the position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnknownDirective { position, .. }
            | Self::UnknownNumericMode { position, .. } => *position,
        }
    }
}

use std::io;

use thiserror::Error;

use super::NumericError;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A boolean value was expected, but not found.
    #[error("Expected a boolean, found {found}.")]
    ExpectedBoolean {
        /// Type name of the value found.
        found: &'static str,
    },
    /// A numeric value was expected, but not found.
    #[error("Expected an integer, found {found}.")]
    ExpectedNumber {
        /// Type name of the value found.
        found: &'static str,
    },
    /// Integer division with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A statement without a value was used where a value is required.
    #[error("{context} needs a value, but the expression produced none.")]
    MissingValue {
        /// What needed the value, such as `Assignment to x`.
        context: String,
    },
    /// `@eval` on a variable that does not hold code.
    #[error("Cannot evaluate non-code value in '{name}'.")]
    NotCode {
        /// The variable name.
        name: String,
    },
    /// Gödel numbers are natural numbers.
    #[error("Cannot decode a negative number.")]
    NegativeGodelNumber,
    /// Encoding or decoding failed.
    #[error(transparent)]
    Numeric(#[from] NumericError),
    /// Writing directive output failed.
    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),
}

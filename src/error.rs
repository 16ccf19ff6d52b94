/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: characters that start no token, tokens in the wrong place, unknown
/// directives and unknown numeric modes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, division by zero or evaluating a value that is not code.
pub mod runtime_error;
/// Gödel numbering errors.
///
/// Raised when a tree has no encoding or a number has no decoding.
pub mod numeric_error;

pub use numeric_error::NumericError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

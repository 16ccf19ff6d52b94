use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised while converting between trees and Gödel numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The node kind has no encoding.
    #[error("Cannot encode {node} numerically.")]
    Unencodable {
        /// Name of the node kind, such as `@exit`.
        node: &'static str,
    },
    /// Integer constants must be natural numbers to be encoded.
    #[error("Negative constants have no numeric encoding.")]
    NegativeConstant,
    /// Only `x`, `y` and `z` can be encoded.
    #[error("Variable '{name}' has no numeric encoding. Only x, y and z can be encoded.")]
    UnknownVariable {
        /// The variable name.
        name: String,
    },
    /// `&` and `|` need boolean operands, not bare variables.
    #[error("The operands of '&' and '|' cannot be bare variables in numeric form.")]
    BareVariableOperand,
    /// A decoded variable index outside `x`, `y`, `z`.
    #[error("Variable index {index} does not name a variable.")]
    UnknownVariableIndex {
        /// The decoded index.
        index: BigUint,
    },
    /// A pairing exponent beyond the supported limit.
    #[error("Number is too large to encode.")]
    TooLarge,
    /// A number whose tree nests past the decoding limit.
    #[error("Number nests more than {limit} levels deep and cannot be decoded.")]
    TooDeep {
        /// The deepest nesting the decoders accept.
        limit: usize,
    },
}

use std::{fmt, rc::Rc};

use num_bigint::BigInt;

use crate::{
    ast::{LiteralValue, Node},
    error::RuntimeError,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments and conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An arbitrary precision integer.
    Integer(BigInt),
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons and logical operators. Used as the condition
    /// of `if` and `while`, which require a `Bool`.
    Bool(bool),
    /// A program held as data, produced by `@from_numeric`.
    ///
    /// The tree is an immutable snapshot, so cloning the value is cheap.
    Code(Rc<Node>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Self::Code(Rc::new(node))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Integer(BigInt::default())
    }
}

impl Value {
    /// Returns a short name for the type of the value, used in error messages.
    ///
    /// # Example
    /// ```
    /// use whilelang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(3).type_name(), "integer");
    /// assert_eq!(Value::from(true).type_name(), "boolean");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Code(_) => "code",
        }
    }

    /// Extracts a boolean, or returns an error if the value is not `Bool`.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` naming the actual type.
    ///
    /// # Example
    /// ```
    /// use whilelang::interpreter::value::core::Value;
    ///
    /// assert!(Value::from(true).as_bool().unwrap());
    /// assert!(Value::from(1).as_bool().is_err());
    /// ```
    pub fn as_bool(&self) -> Result<bool, RuntimeError> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.type_name() }),
        }
    }

    /// Borrows the integer, or returns an error if the value is not `Integer`.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` naming the actual type.
    pub fn as_integer(&self) -> Result<&BigInt, RuntimeError> {
        match self {
            Self::Integer(n) => Ok(n),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_name() }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Code(node) => write!(f, "{node}"),
        }
    }
}

//! Gödel numbering of WHILE programs.
//!
//! Every tree in the canonical subset of the language maps to a natural
//! number and back. Numbers are built from a pairing function `phi` that
//! packs two naturals into one, plus a small tag per node kind:
//!
//! - arithmetic expressions use tags modulo 5 (constants, variables, `+`,
//!   `-`, `*`);
//! - boolean expressions and statements use tags modulo 4.
//!
//! A number alone does not say which category it belongs to, so decoding
//! takes the category explicitly: [`arith_from_num`], [`bool_from_num`] or
//! [`stmt_from_num`]. Encoding is [`Node::numeric`](crate::ast::Node::numeric).

/// The pairing function and its inverse.
pub mod pairing;

/// Tree to number.
pub mod encode;

/// Number to tree, per syntactic category.
pub mod decode;

pub use decode::{MAX_DECODE_DEPTH, arith_from_num, bool_from_num, from_num, stmt_from_num};
pub use pairing::{MAX_PAIRING_EXPONENT, phi, phi_prime};

/// Variable names that have an encoding, in index order.
pub const VARIABLES: [&str; 3] = ["x", "y", "z"];

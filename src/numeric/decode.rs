use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use super::{VARIABLES, pairing::phi_prime};
use crate::{
    ast::{CmpMode, Node, NumericMode},
    error::NumericError,
    util::num::{index_checked, split_tag},
};

type DecodeResult = Result<Node, NumericError>;

/// Deepest tree the decoders build.
///
/// Every nesting level costs one stack frame while decoding and again when
/// the tree is evaluated or rendered, so numbers that nest deeper are
/// rejected instead.
pub const MAX_DECODE_DEPTH: usize = 1024;

/// Decodes `num` in the category named by `mode`.
///
/// # Errors
/// - `NumericError::UnknownVariableIndex` if a variable index other than 0,
///   1 or 2 is reached.
/// - `NumericError::TooDeep` if the tree nests deeper than
///   [`MAX_DECODE_DEPTH`].
pub fn from_num(mode: NumericMode, num: &BigUint) -> DecodeResult {
    match mode {
        NumericMode::Arith => arith_from_num(num),
        NumericMode::Bool => bool_from_num(num),
        NumericMode::Stmt => stmt_from_num(num),
    }
}

/// Decodes an arithmetic expression.
///
/// # Errors
/// Returns `NumericError::UnknownVariableIndex` for variables past `z` and
/// `NumericError::TooDeep` for trees nested past [`MAX_DECODE_DEPTH`].
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use whilelang::{ast::Node, numeric::arith_from_num};
///
/// assert_eq!(arith_from_num(&BigUint::from(15u32)).unwrap(), Node::constant(3));
/// assert_eq!(arith_from_num(&BigUint::from(6u32)).unwrap(), Node::variable("y"));
/// ```
pub fn arith_from_num(num: &BigUint) -> DecodeResult {
    decode_arith(num, 0)
}

/// Decodes a boolean expression.
///
/// `0` and `1` are the constants `true` and `false`; every other number is
/// an equality, a `<=` comparison, a negation or a conjunction.
///
/// # Errors
/// Returns `NumericError::UnknownVariableIndex` for variables past `z` and
/// `NumericError::TooDeep` for trees nested past [`MAX_DECODE_DEPTH`].
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use whilelang::{ast::Node, numeric::bool_from_num};
///
/// assert_eq!(bool_from_num(&BigUint::from(1u32)).unwrap(), Node::constant(false));
/// assert_eq!(bool_from_num(&BigUint::from(4u32)).unwrap(),
///            Node::not(Node::constant(true)));
/// ```
pub fn bool_from_num(num: &BigUint) -> DecodeResult {
    decode_bool(num, 0)
}

/// Decodes a statement.
///
/// Two-statement suites come back as a `Suite`; longer suites come back as
/// suites nested to the right. An `if` whose else part decodes from `0` has
/// no else branch.
///
/// # Errors
/// Returns `NumericError::UnknownVariableIndex` for variables past `z` and
/// `NumericError::TooDeep` for trees nested past [`MAX_DECODE_DEPTH`].
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use whilelang::{ast::Node, numeric::stmt_from_num};
///
/// assert_eq!(stmt_from_num(&BigUint::from(2u32)).unwrap(),
///            Node::assign("x", Node::constant(0)));
/// ```
pub fn stmt_from_num(num: &BigUint) -> DecodeResult {
    decode_stmt(num, 0)
}

/// Returns the depth of the children of a node at `depth`.
const fn descend(depth: usize) -> Result<usize, NumericError> {
    if depth >= MAX_DECODE_DEPTH {
        return Err(NumericError::TooDeep { limit: MAX_DECODE_DEPTH });
    }
    Ok(depth + 1)
}

fn decode_arith(num: &BigUint, depth: usize) -> DecodeResult {
    let (payload, tag) = split_tag(num, 5);
    match tag {
        0 => Ok(Node::constant(BigInt::from(payload))),
        1 => Ok(Node::variable(variable_name(&payload)?)),
        _ => {
            let depth = descend(depth)?;
            let (lhs, rhs) = phi_prime(&payload);
            let lhs = decode_arith(&lhs, depth)?;
            let rhs = decode_arith(&rhs, depth)?;
            Ok(match tag {
                2 => Node::add(lhs, rhs),
                3 => Node::sub(lhs, rhs),
                _ => Node::mul(lhs, rhs),
            })
        },
    }
}

fn decode_bool(num: &BigUint, depth: usize) -> DecodeResult {
    if num.is_zero() {
        return Ok(Node::constant(true));
    }
    if *num == BigUint::from(1u32) {
        return Ok(Node::constant(false));
    }

    let depth = descend(depth)?;
    let (payload, tag) = split_tag(num, 4);
    match tag {
        2 | 3 => {
            let (lhs, rhs) = phi_prime(&payload);
            let lhs = decode_arith(&lhs, depth)?;
            let rhs = decode_arith(&rhs, depth)?;
            Ok(if tag == 2 {
                Node::equal(lhs, rhs)
            } else {
                Node::cmp(CmpMode::LessEqual, lhs, rhs)
            })
        },
        // Negation and conjunction are offset by one extra multiple of four.
        0 => Ok(Node::not(decode_bool(&(payload - 1u32), depth)?)),
        _ => {
            let (lhs, rhs) = phi_prime(&(payload - 1u32));
            Ok(Node::and(decode_bool(&lhs, depth)?, decode_bool(&rhs, depth)?))
        },
    }
}

fn decode_stmt(num: &BigUint, depth: usize) -> DecodeResult {
    if num.is_zero() {
        return Ok(Node::Skip);
    }

    let depth = descend(depth)?;
    let (payload, tag) = split_tag(num, 4);
    match tag {
        1 => {
            let (condition, body) = phi_prime(&payload);
            Ok(Node::while_loop(decode_bool(&condition, depth)?, decode_stmt(&body, depth)?))
        },
        2 => {
            let (index, value) = phi_prime(&payload);
            Ok(Node::assign(variable_name(&index)?, decode_arith(&value, depth)?))
        },
        3 => {
            let (first, second) = phi_prime(&payload);
            Ok(Node::Suite(vec![decode_stmt(&first, depth)?, decode_stmt(&second, depth)?]))
        },
        _ => {
            let (condition, branches) = phi_prime(&(payload - 1u32));
            let (then_branch, else_branch) = phi_prime(&branches);
            let else_branch = if else_branch.is_zero() {
                None
            } else {
                Some(decode_stmt(&else_branch, depth)?)
            };
            Ok(Node::if_then(decode_bool(&condition, depth)?,
                             decode_stmt(&then_branch, depth)?,
                             else_branch))
        },
    }
}

fn variable_name(index: &BigUint) -> Result<&'static str, NumericError> {
    index_checked(index).and_then(|i| VARIABLES.get(i).copied())
                        .ok_or_else(|| NumericError::UnknownVariableIndex { index: index.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn arithmetic_operators() {
        assert_eq!(arith_from_num(&num(12)).unwrap(),
                   Node::add(Node::constant(0), Node::variable("x")));
        assert_eq!(arith_from_num(&num(14)).unwrap(),
                   Node::mul(Node::constant(0), Node::variable("x")));
    }

    #[test]
    fn boolean_operators() {
        // 2 + 4 * phi(0, 1)
        assert_eq!(bool_from_num(&num(10)).unwrap(),
                   Node::equal(Node::constant(0), Node::variable("x")));
        // 5 + 4 * phi(1, 0)
        assert_eq!(bool_from_num(&num(9)).unwrap(),
                   Node::and(Node::constant(false), Node::constant(true)));
    }

    #[test]
    fn negation_inverts_encoding() {
        let tree = Node::not(Node::cmp(CmpMode::LessEqual, Node::variable("x"), Node::constant(2)));
        assert_eq!(bool_from_num(&tree.numeric().unwrap()).unwrap(), tree);
    }

    #[test]
    fn if_without_else() {
        let tree = Node::if_then(Node::constant(true), Node::assign("y", Node::constant(1)), None);
        assert_eq!(stmt_from_num(&tree.numeric().unwrap()).unwrap(), tree);
    }

    #[test]
    fn if_with_else() {
        let tree = Node::if_then(Node::constant(false),
                                 Node::assign("y", Node::constant(1)),
                                 Some(Node::assign("z", Node::variable("y"))));
        assert_eq!(stmt_from_num(&tree.numeric().unwrap()).unwrap(), tree);
    }

    #[test]
    fn unknown_variable_index() {
        // 1 + 5 * 3
        assert_eq!(arith_from_num(&num(16)),
                   Err(NumericError::UnknownVariableIndex { index: num(3) }));
    }

    #[test]
    fn deeply_nested_numbers_are_rejected() {
        // (4^(2^16) - 4) / 3 is 4 + 16 + 64 + ..., a tower of negations.
        let num = ((BigUint::from(1u32) << (2u32 << 16)) - 4u32) / 3u32;
        assert_eq!(bool_from_num(&num),
                   Err(NumericError::TooDeep { limit: MAX_DECODE_DEPTH }));
    }

    #[test]
    fn nesting_up_to_the_limit_decodes() {
        let mut tree = Node::constant(true);
        for _ in 0..MAX_DECODE_DEPTH {
            tree = Node::not(tree);
        }
        assert!(bool_from_num(&tree.numeric().unwrap()).is_ok());

        let deeper = Node::not(tree);
        assert!(matches!(bool_from_num(&deeper.numeric().unwrap()),
                         Err(NumericError::TooDeep { .. })));
    }

    #[test]
    fn mode_dispatch() {
        assert_eq!(from_num(NumericMode::Arith, &num(0)).unwrap(), Node::constant(0));
        assert_eq!(from_num(NumericMode::Bool, &num(0)).unwrap(), Node::constant(true));
        assert_eq!(from_num(NumericMode::Stmt, &num(0)).unwrap(), Node::Skip);
    }
}

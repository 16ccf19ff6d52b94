use num_bigint::BigUint;
use num_traits::Zero;

use super::{VARIABLES, pairing::phi};
use crate::{
    ast::{ArithOp, CmpMode, LiteralValue, Node},
    error::NumericError,
    util::num::join_tag,
};

type EncodeResult = Result<BigUint, NumericError>;

impl Node {
    /// Computes the Gödel number of this tree.
    ///
    /// The result is only meaningful together with the tree's category: an
    /// arithmetic expression, a boolean expression or a statement. Decoding
    /// with the matching function from [`crate::numeric`] gives the tree back.
    ///
    /// Comparisons other than `<=` are rewritten before encoding (`a >= b`
    /// becomes `b <= a`, `a < b` becomes `¬(b <= a)`), and `a | b` becomes
    /// `¬(¬a & ¬b)`. `@trace`, `@print` and `@help` have no effect on the
    /// namespace and encode like `skip`.
    ///
    /// # Errors
    /// - `NumericError::Unencodable` for division and for the directives
    ///   that have no encoding.
    /// - `NumericError::NegativeConstant` for constants below zero.
    /// - `NumericError::UnknownVariable` for names other than `x`, `y`, `z`.
    /// - `NumericError::BareVariableOperand` for `&`/`|` with a variable
    ///   directly as operand.
    /// - `NumericError::TooLarge` if an intermediate number grows past the
    ///   pairing limit.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// use whilelang::ast::Node;
    ///
    /// assert_eq!(Node::constant(3).numeric().unwrap(), BigUint::from(15u32));
    /// assert_eq!(Node::variable("y").numeric().unwrap(), BigUint::from(6u32));
    /// assert!(Node::and(Node::variable("x"), Node::constant(true)).numeric().is_err());
    /// ```
    pub fn numeric(&self) -> EncodeResult {
        match self {
            Self::Skip | Self::Trace(_) | Self::Print(_) | Self::Help => Ok(BigUint::zero()),
            Self::Suite(statements) => encode_suite(statements),
            Self::Constant(LiteralValue::Integer(n)) => {
                let n = n.to_biguint().ok_or(NumericError::NegativeConstant)?;
                Ok(join_tag(n, 5, 0))
            },
            Self::Constant(LiteralValue::Bool(b)) => Ok(BigUint::from(u32::from(!*b))),
            Self::Variable(name) => Ok(join_tag(variable_index(name)?, 5, 1)),
            Self::Arith { op, lhs, rhs } => {
                let tag = match op {
                    ArithOp::Add => 2,
                    ArithOp::Sub => 3,
                    ArithOp::Mul => 4,
                    ArithOp::Div => return Err(unencodable(self)),
                };
                Ok(join_tag(pair(lhs, rhs)?, 5, tag))
            },
            Self::Eq { lhs, rhs } => Ok(join_tag(pair(lhs, rhs)?, 4, 2)),
            Self::Cmp { mode, lhs, rhs } => match mode {
                CmpMode::LessEqual => less_equal(lhs, rhs),
                CmpMode::GreaterEqual => less_equal(rhs, lhs),
                CmpMode::Less => Ok(negate(less_equal(rhs, lhs)?)),
                CmpMode::Greater => Ok(negate(less_equal(lhs, rhs)?)),
            },
            Self::And { lhs, rhs } => {
                check_logic_operands(lhs, rhs)?;
                Ok(join_tag(pair(lhs, rhs)?, 4, 5))
            },
            Self::Or { lhs, rhs } => {
                check_logic_operands(lhs, rhs)?;
                let both_false = phi(&negate(lhs.numeric()?), &negate(rhs.numeric()?))?;
                Ok(negate(join_tag(both_false, 4, 5)))
            },
            Self::Not(expr) => Ok(negate(expr.numeric()?)),
            Self::Assign { name, value } => {
                Ok(join_tag(phi(&variable_index(name)?, &value.numeric()?)?, 4, 2))
            },
            Self::While { condition, body } => Ok(join_tag(pair(condition, body)?, 4, 1)),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                let else_num = match else_branch {
                    Some(branch) => branch.numeric()?,
                    None => BigUint::zero(),
                };
                let branches = phi(&then_branch.numeric()?, &else_num)?;
                Ok(join_tag(phi(&condition.numeric()?, &branches)?, 4, 4))
            },
            Self::Exit
            | Self::Reset
            | Self::Numeric(_)
            | Self::FromNumeric { .. }
            | Self::RunNumeric { .. }
            | Self::Eval(_) => Err(unencodable(self)),
        }
    }
}

fn unencodable(node: &Node) -> NumericError {
    NumericError::Unencodable { node: node.kind_name() }
}

fn pair(lhs: &Node, rhs: &Node) -> EncodeResult {
    phi(&lhs.numeric()?, &rhs.numeric()?)
}

fn less_equal(lhs: &Node, rhs: &Node) -> EncodeResult {
    Ok(join_tag(pair(lhs, rhs)?, 4, 3))
}

fn negate(num: BigUint) -> BigUint {
    join_tag(num, 4, 4)
}

fn check_logic_operands(lhs: &Node, rhs: &Node) -> Result<(), NumericError> {
    if matches!(lhs, Node::Variable(_)) || matches!(rhs, Node::Variable(_)) {
        return Err(NumericError::BareVariableOperand);
    }
    Ok(())
}

fn variable_index(name: &str) -> EncodeResult {
    VARIABLES.iter()
             .position(|candidate| *candidate == name)
             .map(BigUint::from)
             .ok_or_else(|| NumericError::UnknownVariable { name: name.to_string() })
}

/// Empty suites are `skip`, single statements pass through, longer suites
/// nest to the right: `s1; s2; s3` is `3 + 4 * phi(s1, 3 + 4 * phi(s2, s3))`.
fn encode_suite(statements: &[Node]) -> EncodeResult {
    let Some((last, rest)) = statements.split_last() else {
        return Ok(BigUint::zero());
    };

    rest.iter().rev().try_fold(last.numeric()?, |acc, statement| {
                          Ok(join_tag(phi(&statement.numeric()?, &acc)?, 4, 3))
                      })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::Position;

    fn num(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn constants_and_variables() {
        assert_eq!(Node::constant(0).numeric().unwrap(), num(0));
        assert_eq!(Node::constant(3).numeric().unwrap(), num(15));
        assert_eq!(Node::constant(true).numeric().unwrap(), num(0));
        assert_eq!(Node::constant(false).numeric().unwrap(), num(1));
        assert_eq!(Node::variable("z").numeric().unwrap(), num(11));
    }

    #[test]
    fn arithmetic_uses_tags_modulo_five() {
        // 2 + 5 * phi(0, 1)
        let sum = Node::add(Node::constant(0), Node::variable("x"));
        assert_eq!(sum.numeric().unwrap(), num(12));
    }

    #[test]
    fn comparisons_are_rewritten_to_less_equal() {
        let x = || Node::variable("x");
        let y = || Node::variable("y");
        let ge = Node::cmp(CmpMode::GreaterEqual, x(), y());
        let le = Node::cmp(CmpMode::LessEqual, y(), x());
        assert_eq!(ge.numeric().unwrap(), le.numeric().unwrap());

        let lt = Node::cmp(CmpMode::Less, x(), y());
        assert_eq!(lt.numeric().unwrap(), Node::not(le).numeric().unwrap());
    }

    #[test]
    fn disjunction_is_encoded_through_conjunction() {
        let a = || Node::constant(true);
        let b = || Node::constant(false);
        let or = Node::or(a(), b());
        let rewritten = Node::not(Node::and(Node::not(a()), Node::not(b())));
        assert_eq!(or.numeric().unwrap(), rewritten.numeric().unwrap());
    }

    #[test]
    fn suites_nest_to_the_right() {
        let s = || Node::assign("x", Node::constant(0));
        assert_eq!(Node::Suite(vec![]).numeric().unwrap(), num(0));
        assert_eq!(Node::Suite(vec![s()]).numeric().unwrap(), num(2));
        // 3 + 4 * phi(2, 2) = 3 + 4 * 19
        assert_eq!(Node::Suite(vec![s(), s()]).numeric().unwrap(), num(79));
    }

    #[test]
    fn side_effect_free_directives_encode_as_skip() {
        assert_eq!(Node::Trace(Position::default()).numeric().unwrap(), num(0));
        assert_eq!(Node::Print("x".to_string()).numeric().unwrap(), num(0));
        assert_eq!(Node::Help.numeric().unwrap(), num(0));
    }

    #[test]
    fn unencodable_trees() {
        assert_eq!(Node::Exit.numeric(), Err(NumericError::Unencodable { node: "@exit" }));
        assert_eq!(Node::div(Node::constant(4), Node::constant(2)).numeric(),
                   Err(NumericError::Unencodable { node: "division" }));
        assert_eq!(Node::constant(-1).numeric(), Err(NumericError::NegativeConstant));
        assert_eq!(Node::variable("w").numeric(),
                   Err(NumericError::UnknownVariable { name: "w".to_string() }));
        assert_eq!(Node::or(Node::constant(true), Node::variable("y")).numeric(),
                   Err(NumericError::BareVariableOperand));
    }
}

use std::iter::Peekable;

use crate::{
    ast::{ArithOp, CmpMode, Node},
    interpreter::{
        lexer::{Position, Token},
        parser::{core::ParseResult, unary::parse_factor, utils::peek},
    },
};

/// Parses logical OR expressions.
///
/// The rule is: `or := and ("|" and)*`
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_and(tokens)?;
    while peek(tokens).0 == Token::Pipe {
        tokens.next();
        let right = parse_and(tokens)?;
        left = Node::or(left, right);
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// The rule is: `and := equality ("&" equality)*`
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_equality(tokens)?;
    while peek(tokens).0 == Token::Ampersand {
        tokens.next();
        let right = parse_equality(tokens)?;
        left = Node::and(left, right);
    }
    Ok(left)
}

/// Parses equality tests.
///
/// The rule is: `equality := comparison ("=" comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_comparison(tokens)?;
    while peek(tokens).0 == Token::Equals {
        tokens.next();
        let right = parse_comparison(tokens)?;
        left = Node::equal(left, right);
    }
    Ok(left)
}

/// Parses ordering comparisons.
///
/// Comparisons chain to the left like every other level, so `a < b < c`
/// compares a boolean with `c` and fails at runtime.
///
/// The rule is: `comparison := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_additive(tokens)?;
    while let Some(mode) = token_to_cmp_mode(&peek(tokens).0) {
        tokens.next();
        let right = parse_additive(tokens)?;
        left = Node::cmp(mode, left, right);
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Returns
/// A `Node::Arith` tree, or the operand itself if no operator follows.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(op) = token_to_arith_op(&peek(tokens).0)
           && matches!(op, ArithOp::Add | ArithOp::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Node::arith(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(op) = token_to_arith_op(&peek(tokens).0)
           && matches!(op, ArithOp::Mul | ArithOp::Div)
        {
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Node::arith(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

const fn token_to_arith_op(token: &Token) -> Option<ArithOp> {
    match token {
        Token::Plus => Some(ArithOp::Add),
        Token::Minus => Some(ArithOp::Sub),
        Token::Star => Some(ArithOp::Mul),
        Token::Slash => Some(ArithOp::Div),
        _ => None,
    }
}

const fn token_to_cmp_mode(token: &Token) -> Option<CmpMode> {
    match token {
        Token::Less => Some(CmpMode::Less),
        Token::LessEqual => Some(CmpMode::LessEqual),
        Token::Greater => Some(CmpMode::Greater),
        Token::GreaterEqual => Some(CmpMode::GreaterEqual),
        _ => None,
    }
}

use std::iter::Peekable;

use num_bigint::BigInt;

use crate::{
    ast::{Node, NumericMode},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression, parse_suite},
            statement::parse_statement,
            utils::{expect, parse_name, peek, unexpected},
        },
    },
};

/// Parses a factor with an optional negation prefix.
///
/// The prefix is written `!` or `¬` and may appear at most once; use
/// parentheses to negate twice. It applies to every kind of factor,
/// directives included.
///
/// Grammar:
/// ```text
///     factor := ("!" | "¬")? primary
/// ```
///
/// # Errors
/// Propagates errors from [`parse_primary`].
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if peek(tokens).0 == Token::Bang {
        tokens.next();
        let primary = parse_primary(tokens)?;
        return Ok(Node::not(primary));
    }
    parse_primary(tokens)
}

/// Parses a primary expression.
///
/// Grammar:
/// ```text
///     primary := "(" expression ")" | NAME | NUMBER | BOOLEAN | directive
/// ```
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any other token.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let current = peek(tokens);
    match current {
        (Token::LParen, _) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        (Token::Name(name), _) => {
            tokens.next();
            Ok(Node::variable(name.clone()))
        },
        (Token::Number(n), _) => {
            tokens.next();
            Ok(Node::constant(BigInt::from(n.clone())))
        },
        (Token::Bool(b), _) => {
            tokens.next();
            Ok(Node::constant(*b))
        },
        (Token::Directive(name), position) => {
            tokens.next();
            parse_directive(tokens, name, *position)
        },
        _ => Err(unexpected(current, "an expression")),
    }
}

/// Parses the arguments of a directive whose `@name` was just consumed.
///
/// Grammar:
/// ```text
///     directive := "@trace" | "@exit" | "@help" | "@reset"
///                | "@print" NAME | "@eval" NAME
///                | "@numeric" suite
///                | "@from_numeric" MODE statement
///                | "@run_numeric" MODE statement
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the directive.
/// - `name`: The directive name without `@`.
/// - `position`: Where the directive started, recorded by `@trace`.
///
/// # Errors
/// - `UnknownDirective` if `name` is not a directive.
/// - `UnknownNumericMode` if the mode is not `a`, `b` or `stmt`.
fn parse_directive<'a, I>(tokens: &mut Peekable<I>,
                          name: &str,
                          position: Position)
                          -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match name {
        "trace" => Ok(Node::Trace(position)),
        "exit" => Ok(Node::Exit),
        "help" => Ok(Node::Help),
        "reset" => Ok(Node::Reset),
        "print" => Ok(Node::Print(parse_name(tokens)?.0)),
        "eval" => Ok(Node::Eval(parse_name(tokens)?.0)),
        "numeric" => Ok(Node::Numeric(Box::new(parse_suite(tokens)?))),
        "from_numeric" => {
            let mode = parse_mode(tokens)?;
            let num = Box::new(parse_statement(tokens)?);
            Ok(Node::FromNumeric { mode, num })
        },
        "run_numeric" => {
            let mode = parse_mode(tokens)?;
            let num = Box::new(parse_statement(tokens)?);
            Ok(Node::RunNumeric { mode, num })
        },
        _ => Err(ParseError::UnknownDirective { name: name.to_string(),
                                                position }),
    }
}

fn parse_mode<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<NumericMode>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (mode, position) = parse_name(tokens)?;
    NumericMode::from_name(&mode).ok_or(ParseError::UnknownNumericMode { mode, position })
}

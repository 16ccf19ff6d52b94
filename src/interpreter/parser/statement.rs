use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression, parse_suite},
            utils::{expect, peek, peek_second},
        },
    },
};

/// Parses a single statement.
///
/// A name followed by `:=` starts an assignment; any other name starts an
/// expression statement. This needs one token of lookahead past the current
/// one.
///
/// Grammar:
/// ```text
///     statement := "skip"
///                | "if" expression "then" suite ("else" suite)?
///                | "while" expression "do" suite
///                | NAME ":=" expression
///                | expression
/// ```
///
/// # Errors
/// Propagates any error from the nested rules.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match peek(tokens) {
        (Token::Skip, _) => {
            tokens.next();
            Ok(Node::Skip)
        },
        (Token::If, _) => {
            tokens.next();
            parse_if(tokens)
        },
        (Token::While, _) => {
            tokens.next();
            parse_while(tokens)
        },
        (Token::Name(name), _) if *peek_second(tokens) == Token::ColonEquals => {
            tokens.next();
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Node::assign(name.clone(), value))
        },
        _ => parse_expression(tokens),
    }
}

/// Parses the rest of an `if` statement after the `if` keyword.
///
/// Both branches are full suites, so `if c then x := 1; y := 2` puts both
/// assignments in the `then` branch. Parenthesise the branch to end it
/// early.
///
/// # Errors
/// - `UnexpectedToken` if `then` is missing.
/// - Propagates any errors from the condition or the branches.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then, "'then'")?;
    let then_branch = parse_suite(tokens)?;

    let else_branch = if peek(tokens).0 == Token::Else {
        tokens.next();
        Some(parse_suite(tokens)?)
    } else {
        None
    };

    Ok(Node::if_then(condition, then_branch, else_branch))
}

/// Parses the rest of a `while` loop after the `while` keyword.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Do, "'do'")?;
    let body = parse_suite(tokens)?;
    Ok(Node::while_loop(condition, body))
}

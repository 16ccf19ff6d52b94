use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            binary::parse_or,
            statement::parse_statement,
            utils::{expect, peek},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// A program is a single suite that must consume every token up to `Eof`.
///
/// Grammar: `program := suite EOF`
///
/// # Errors
/// Returns a `ParseError` for any syntax error, including tokens left over
/// after the suite ends.
///
/// # Example
/// ```
/// use whilelang::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("x := 1; skip").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program, Node::Suite(vec![Node::assign("x", Node::constant(1)), Node::Skip]));
/// ```
pub fn parse_program(tokens: &[(Token, Position)]) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();
    let suite = parse_suite(&mut iter)?;
    expect(&mut iter, &Token::Eof, "';' or end of input")?;
    Ok(suite)
}

/// Parses a sequence of statements separated by `;`.
///
/// An item starting with `(` is a nested suite closed by `)`, unless the
/// closing parenthesis is followed by a binary operator, in which case the
/// item is an expression statement with a parenthesised operand. The suite ends
/// at `Eof` or at the first item not followed by `;`, leaving the next token
/// for the caller. A trailing `;` right before `Eof` is accepted.
///
/// Grammar: `suite := item (";" item)*` where `item := "(" suite ")" | statement`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
///
/// # Returns
/// A `Node::Suite`, possibly empty.
pub fn parse_suite<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut statements = Vec::new();

    while peek(tokens).0 != Token::Eof {
        if peek(tokens).0 == Token::LParen {
            let mut group = tokens.clone();
            group.next();
            let nested = parse_suite(&mut group)?;
            expect(&mut group, &Token::RParen, "')'")?;

            // `(x + 1) * 2` is an expression statement, not a nested suite.
            if continues_expression(&peek(&mut group).0) {
                statements.push(parse_statement(tokens)?);
            } else {
                *tokens = group;
                statements.push(nested);
            }
        } else {
            statements.push(parse_statement(tokens)?);
        }

        if peek(tokens).0 != Token::Semicolon {
            break;
        }
        tokens.next();
    }

    Ok(Node::Suite(statements))
}

/// Whether `token` is a binary operator that can extend an expression.
const fn continues_expression(token: &Token) -> bool {
    matches!(token,
             Token::Pipe
             | Token::Ampersand
             | Token::Equals
             | Token::Less
             | Token::LessEqual
             | Token::Greater
             | Token::GreaterEqual
             | Token::Plus
             | Token::Minus
             | Token::Star
             | Token::Slash)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_or(tokens)
}

use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::lexer::{Position, Token},
};

/// Returned once the stream is exhausted, so callers never see `None`.
static END: (Token, Position) = (Token::Eof, Position { line: 0, column: 0 });

/// Returns the current token without consuming it.
///
/// Token streams from [`tokenize`](crate::interpreter::lexer::tokenize)
/// end with `Eof`, and no rule consumes it, so the fallback is only reached
/// for hand-built streams.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> &'a (Token, Position)
    where I: Iterator<Item = &'a (Token, Position)>
{
    tokens.peek().copied().unwrap_or(&END)
}

/// Returns the token after the current one without consuming anything.
pub(in crate::interpreter::parser) fn peek_second<'a, I>(tokens: &Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    lookahead.next().map_or(&END.0, |(token, _)| token)
}

/// Builds the error for a token that does not fit the current rule.
pub(in crate::interpreter::parser) fn unexpected((token, position): &(Token, Position),
                                                 expected: &str)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    token.to_string(),
                                  position: *position, }
}

/// Consumes the current token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `description`: How the expected token is named in the error message.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` without consuming anything if the
/// current token is a different one.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> Result<Position, ParseError>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let current = peek(tokens);
    if current.0 != *expected {
        return Err(unexpected(current, description));
    }
    tokens.next();
    Ok(current.1)
}

/// Parses a plain name and returns it together with its position.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the current token is not a name.
pub(in crate::interpreter::parser) fn parse_name<'a, I>(tokens: &mut Peekable<I>)
                                                        -> Result<(String, Position), ParseError>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match peek(tokens) {
        (Token::Name(name), position) => {
            tokens.next();
            Ok((name.clone(), *position))
        },
        other => Err(unexpected(other, "a name")),
    }
}

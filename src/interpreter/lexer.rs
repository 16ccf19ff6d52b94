use std::fmt;

use logos::Logos;
use num_bigint::BigUint;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// Symbols and keywords get one variant each; numbers, names, booleans and
/// directives carry their payload. `Eof` is never produced by the lexer
/// itself and is appended by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Natural number literals of any size, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(BigUint),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `skip`
    #[token("skip")]
    Skip,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// Variable names such as `x` or `_arg0`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// Directives such as `@trace`, stored without the leading `@`.
    #[regex(r"@[a-zA-Z_]+", |lex| lex.slice()[1..].to_string())]
    Directive(String),
    /// `:=`
    #[token(":=")]
    ColonEquals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `|`
    #[token("|")]
    Pipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!` or `¬`
    #[token("!")]
    #[token("¬")]
    Bang,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks, tracked for positions.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
    /// End of input.
    Eof,
}

/// Coarse token categories, as reported in parse errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Symbol,
    Name,
    Keyword,
    Boolean,
    Directive,
    Eof,
}

impl Token {
    /// Returns the category of this token.
    ///
    /// ## Example
    /// ```
    /// use whilelang::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::ColonEquals.kind(), TokenKind::Symbol);
    /// assert_eq!(Token::While.kind(), TokenKind::Keyword);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Bool(_) => TokenKind::Boolean,
            Self::Skip | Self::If | Self::Then | Self::Else | Self::While | Self::Do => {
                TokenKind::Keyword
            },
            Self::Name(_) => TokenKind::Name,
            Self::Directive(_) => TokenKind::Directive,
            Self::Eof => TokenKind::Eof,
            _ => TokenKind::Symbol,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Symbol => "SYMBOL",
            Self::Name => "NAME",
            Self::Keyword => "KEYWORD",
            Self::Boolean => "BOOLEAN",
            Self::Directive => "DIRECTIVE",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = match self {
            Self::Number(n) => return write!(f, "{} '{n}'", self.kind()),
            Self::Bool(b) => return write!(f, "{} '{b}'", self.kind()),
            Self::Name(name) => return write!(f, "{} '{name}'", self.kind()),
            Self::Directive(name) => return write!(f, "{} '@{name}'", self.kind()),
            Self::Eof => return write!(f, "end of input"),
            Self::Skip => "skip",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::While => "while",
            Self::Do => "do",
            Self::ColonEquals => ":=",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Pipe => "|",
            Self::Ampersand => "&",
            Self::Equals => "=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::Comment | Self::NewLine | Self::Ignored => "",
        };
        write!(f, "{} '{lexeme}'", self.kind())
    }
}

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line:   usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// every token can be given a column as well.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl LexerExtras {
    /// Columns count characters, not bytes, so `¬` takes a single column.
    fn position(&self, source: &str, offset: usize) -> Position {
        let column = source.get(self.line_start..offset)
                           .map_or(offset - self.line_start, |line| line.chars().count());
        Position { line:   self.line,
                   column: column + 1, }
    }
}

fn parse_number(lex: &logos::Lexer<Token>) -> Option<BigUint> {
    lex.slice().parse().ok()
}

/// Splits source text into positioned tokens, terminated by [`Token::Eof`].
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for input that does not start
/// any token.
///
/// # Example
/// ```
/// use whilelang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x := 1").unwrap();
/// let kinds: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            [&Token::Name("x".to_string()), &Token::ColonEquals, &Token::Number(1u32.into()),
///             &Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line:       1,
                                                                   line_start: 0, });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let position = lexer.extras.position(source, lexer.span().start);
        match token {
            Ok(token) => tokens.push((token, position)),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { lexeme: lexer.slice().to_string(),
                                                             position });
            },
        }
    }

    let end = lexer.extras.position(source, source.len());
    tokens.push((Token::Eof, end));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_of(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn keywords_win_over_names_of_the_same_length() {
        assert_eq!(tokens_of("while whiles"),
                   vec![Token::While, Token::Name("whiles".to_string()), Token::Eof]);
    }

    #[test]
    fn both_negation_spellings_lex_to_bang() {
        assert_eq!(tokens_of("!¬"), vec![Token::Bang, Token::Bang, Token::Eof]);
    }

    #[test]
    fn directives_drop_the_at_sign() {
        assert_eq!(tokens_of("@print x"),
                   vec![Token::Directive("print".to_string()),
                        Token::Name("x".to_string()),
                        Token::Eof]);
    }

    #[test]
    fn comments_and_newlines_are_skipped_but_counted() {
        let tokens = tokenize("# header\nx := 1\n  y").unwrap();
        assert_eq!(tokens[0].1, Position { line: 2, column: 1 });
        assert_eq!(tokens[3].1, Position { line: 3, column: 3 });
        assert_eq!(tokens[3].0, Token::Name("y".to_string()));
    }

    #[test]
    fn columns_count_characters() {
        let tokens = tokenize("¬x = y\n¬¬ z").unwrap();
        assert_eq!(tokens[3], (Token::Name("y".to_string()), Position { line: 1, column: 6 }));
        assert_eq!(tokens[6], (Token::Name("z".to_string()), Position { line: 2, column: 4 }));
        assert_eq!(tokens[7].1, Position { line: 2, column: 5 });
    }

    #[test]
    fn large_numbers_keep_full_precision() {
        let digits = "123456789012345678901234567890";
        assert_eq!(tokens_of(digits)[0], Token::Number(digits.parse().unwrap()));
    }

    #[test]
    fn unknown_characters_are_reported_with_position() {
        let err = tokenize("x := $").unwrap_err();
        assert!(matches!(err,
                         ParseError::UnexpectedCharacter { ref lexeme,
                                                           position: Position { line: 1,
                                                                                column: 6 }, }
                         if lexeme == "$"));
    }
}

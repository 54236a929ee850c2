use logos::Logos;

use crate::{error::ParseError, interpreter::parser::ParseResult};

/// Represents a lexical token of an expression.
///
/// Only digits, the six operators, parentheses and spaces are part of the
/// alphabet. Anything else fails to lex and rejects the whole input.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// A run of digits such as `42`.
    #[regex(r"[0-9]+")]
    Number,
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
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Checks that `input` only uses characters of the expression alphabet.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` carrying the first text that is not
/// part of the alphabet.
///
/// # Example
/// ```
/// use exptree::{error::ParseError, interpreter::lexer::validate};
///
/// assert!(validate(" + 1 (2) ").is_ok());
/// assert_eq!(validate("23f"),
///            Err(ParseError::InvalidCharacter { found: "f".to_string() }));
/// ```
pub fn validate(input: &str) -> ParseResult<()> {
    infix_words(input).map(|_| ())
}

/// Splits an infix string into words.
///
/// Numbers, operators and parentheses each become one word regardless of
/// spacing, so `(8*7)` yields `(`, `8`, `*`, `7`, `)`.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` for text outside the alphabet.
pub fn infix_words(input: &str) -> ParseResult<Vec<&str>> {
    let mut lexer = Token::lexer(input);
    let mut words = Vec::new();

    while let Some(token) = lexer.next() {
        if token.is_err() {
            return Err(ParseError::InvalidCharacter { found: lexer.slice().to_string() });
        }
        words.push(lexer.slice());
    }

    Ok(words)
}

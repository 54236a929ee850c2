use log::debug;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        converter::{infix::infix_to_prefix, postfix::postfix_to_prefix},
        lexer::infix_words,
        parser::ParseResult,
    },
    util::num::is_digits,
};

/// The placement convention detected for an input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    /// Nothing but whitespace was given.
    Empty,
    /// Operators precede their operands: `+ 1 1`.
    Prefix,
    /// Operators sit between their operands: `(1+1)`.
    Infix,
    /// Operators follow their operands: `1 1 +`.
    Postfix,
}

impl Notation {
    /// Decides which notation a trimmed input is written in.
    ///
    /// Rules are tried in order and the first match wins:
    /// 1. prefix, when the first word is an operator or the whole input is a
    ///    bare number;
    /// 2. infix, when the input contains no spaces;
    /// 3. postfix, when the last word is an operator.
    ///
    /// A match is only a guess; conversion or tree building may still reject
    /// the input later.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownNotation` when no rule matches.
    ///
    /// # Example
    /// ```
    /// use exptree::interpreter::notation::Notation;
    ///
    /// assert_eq!(Notation::detect("+ 1 1").unwrap(), Notation::Prefix);
    /// assert_eq!(Notation::detect("34235").unwrap(), Notation::Prefix);
    /// assert_eq!(Notation::detect("(1+1)").unwrap(), Notation::Infix);
    /// assert_eq!(Notation::detect("1 1 +").unwrap(), Notation::Postfix);
    /// assert!(Notation::detect("1 1").is_err());
    /// ```
    pub fn detect(input: &str) -> ParseResult<Self> {
        let is_operator = |word: &str| BinaryOperator::from_symbol(word).is_some();
        let mut words = input.split_whitespace();

        let notation = if input.is_empty() {
            Self::Empty
        } else if words.next().is_some_and(is_operator) || is_digits(input) {
            Self::Prefix
        } else if !input.contains(' ') {
            Self::Infix
        } else if words.next_back().is_some_and(is_operator) {
            Self::Postfix
        } else {
            return Err(ParseError::UnknownNotation);
        };

        debug!("detected {notation:?} notation for {input:?}");
        Ok(notation)
    }

    /// The user-facing sentence announcing this notation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "No input detected.",
            Self::Prefix => "Input detected as prefix notation.",
            Self::Infix => "Input detected as infix notation.",
            Self::Postfix => "Input detected as postfix notation.",
        }
    }

    /// Rewrites a trimmed input in this notation as a prefix word stream.
    ///
    /// # Errors
    /// Propagates lexing and conversion errors for infix and postfix input.
    pub fn to_prefix(self, input: &str) -> ParseResult<Vec<&str>> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Prefix => Ok(input.split_whitespace().collect()),
            Self::Infix => infix_to_prefix(&infix_words(input)?),
            Self::Postfix => postfix_to_prefix(&input.split_whitespace().collect::<Vec<_>>()),
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Prefix => "prefix",
            Self::Infix => "infix",
            Self::Postfix => "postfix",
        };
        write!(f, "{name}")
    }
}

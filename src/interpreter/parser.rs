use crate::{
    ast::{BinaryOperator, ExprNode},
    error::ParseError,
    util::num::is_digits,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest chain of nested operators a tree may have.
///
/// Building, evaluating, printing and dropping a tree all recurse once per
/// level, so deeper inputs are rejected before they are built.
pub const MAX_NESTING: usize = 1000;

/// Builds a tree from a prefix word stream.
///
/// The stream is consumed left to right through a single cursor: an operator
/// word builds its left subtree, then its right subtree, from the words that
/// follow it. The whole stream must be used by the root.
///
/// # Errors
/// - `UnexpectedEndOfInput` when an operand is still owed but the words ran
///   out.
/// - `UnexpectedToken` / `LiteralOutOfRange` for words that are not valid
///   literals or operators.
/// - `UnexpectedTrailingTokens` when words remain after the root is complete.
/// - `NestingTooDeep` when operators nest more than [`MAX_NESTING`] levels.
///
/// # Example
/// ```
/// use exptree::interpreter::parser::parse_prefix;
///
/// let tree = parse_prefix(["+", "1", "*", "2", "3"]).unwrap();
/// assert_eq!(tree.to_infix(), "(1+(2*3))");
///
/// assert!(parse_prefix(["+", "1"]).is_err());
/// assert!(parse_prefix(["+", "1", "2", "3"]).is_err());
/// ```
pub fn parse_prefix<'a, I>(words: I) -> ParseResult<ExprNode>
    where I: IntoIterator<Item = &'a str>
{
    let mut cursor = words.into_iter();
    let root = parse_node(&mut cursor, 0)?;

    if let Some(extra) = cursor.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: extra.to_string() });
    }

    Ok(root)
}

fn parse_node<'a, I>(cursor: &mut I, nesting: usize) -> ParseResult<ExprNode>
    where I: Iterator<Item = &'a str>
{
    let word = cursor.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    if let Some(op) = BinaryOperator::from_symbol(word) {
        if nesting == MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }
        let left = parse_node(cursor, nesting + 1)?;
        let right = parse_node(cursor, nesting + 1)?;
        return Ok(ExprNode::binary(op, left, right));
    }

    Ok(ExprNode::Literal { value: parse_literal(word)? })
}

/// Parses a non-negative integer literal.
///
/// # Errors
/// - `UnexpectedToken` if the word is not made of digits only (signs and
///   decimal points included).
/// - `LiteralOutOfRange` if the digits exceed `i32::MAX`.
///
/// # Example
/// ```
/// use exptree::{error::ParseError, interpreter::parser::parse_literal};
///
/// assert_eq!(parse_literal("2147483647"), Ok(i32::MAX));
/// assert!(matches!(parse_literal("2147483648"),
///                  Err(ParseError::LiteralOutOfRange { .. })));
/// assert!(matches!(parse_literal("-54"), Err(ParseError::UnexpectedToken { .. })));
/// ```
pub fn parse_literal(word: &str) -> ParseResult<i32> {
    if !is_digits(word) {
        return Err(ParseError::UnexpectedToken { token: word.to_string() });
    }

    word.parse()
        .map_err(|_| ParseError::LiteralOutOfRange { literal: word.to_string() })
}

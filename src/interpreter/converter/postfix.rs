use log::debug;

use crate::{ast::BinaryOperator, error::ParseError, interpreter::parser::ParseResult};

/// Converts postfix words into prefix words.
///
/// Operands are pushed as one-word fragments. An operator pops its right
/// operand, then its left one, and pushes the fragment `op left right`.
/// Exactly one fragment must remain at the end. Operand words are not
/// checked here; the tree builder rejects anything that is not a literal.
///
/// # Errors
/// - `MissingOperand` if an operator finds fewer than two fragments.
/// - `DanglingOperands` if more than one fragment is left over.
/// - `UnexpectedEndOfInput` if there are no words at all.
///
/// # Example
/// ```
/// use exptree::interpreter::converter::postfix::postfix_to_prefix;
///
/// let prefix = postfix_to_prefix(&["8", "7", "*", "4", "+"]).unwrap();
/// assert_eq!(prefix, ["+", "*", "8", "7", "4"]);
/// assert!(postfix_to_prefix(&["54", "-"]).is_err());
/// ```
pub fn postfix_to_prefix<'a>(words: &[&'a str]) -> ParseResult<Vec<&'a str>> {
    let mut stack: Vec<Vec<&'a str>> = Vec::new();

    for &word in words {
        if BinaryOperator::from_symbol(word).is_none() {
            stack.push(vec![word]);
            continue;
        }

        let missing = || ParseError::MissingOperand { operator: word.to_string() };
        let right = stack.pop().ok_or_else(missing)?;
        let left = stack.pop().ok_or_else(missing)?;

        let mut fragment = Vec::with_capacity(1 + left.len() + right.len());
        fragment.push(word);
        fragment.extend(left);
        fragment.extend(right);
        stack.push(fragment);
    }

    let prefix = stack.pop().ok_or(ParseError::UnexpectedEndOfInput)?;
    if !stack.is_empty() {
        return Err(ParseError::DanglingOperands { count: stack.len() + 1 });
    }

    debug!("postfix {words:?} -> prefix {prefix:?}");
    Ok(prefix)
}

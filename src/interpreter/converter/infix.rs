use log::debug;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::parser::ParseResult,
    util::num::is_digits,
};

/// Converts infix words into prefix words.
///
/// The words are reversed with `(` and `)` swapped, converted to postfix and
/// reversed once more. Because the postfix pass only pops operators of
/// strictly higher precedence, operators of equal precedence come out
/// left-associative after the final reversal, `^` included.
///
/// # Errors
/// - `UnmatchedParenthesis` for a `(` or `)` without its partner.
/// - `UnexpectedToken` for a word that is not a number, an operator or a
///   parenthesis.
///
/// # Example
/// ```
/// use exptree::interpreter::converter::infix::infix_to_prefix;
///
/// let prefix = infix_to_prefix(&["8", "-", "3", "-", "2"]).unwrap();
/// assert_eq!(prefix, ["-", "-", "8", "3", "2"]);
///
/// let prefix = infix_to_prefix(&["(", "1", "+", "2", ")", "*", "3"]).unwrap();
/// assert_eq!(prefix, ["*", "+", "1", "2", "3"]);
/// ```
pub fn infix_to_prefix<'a>(words: &[&'a str]) -> ParseResult<Vec<&'a str>> {
    let postfix = infix_to_postfix(&reverse_swapping_parens(words))?;
    let prefix = reverse_swapping_parens(&postfix);

    debug!("infix {words:?} -> prefix {prefix:?}");
    Ok(prefix)
}

/// Shunting-yard conversion from infix words to postfix words.
///
/// An incoming operator pops every stacked operator whose precedence is
/// strictly greater than its own. `None` on the stack marks an open
/// parenthesis.
///
/// # Errors
/// Same as [`infix_to_prefix`].
pub fn infix_to_postfix<'a>(words: &[&'a str]) -> ParseResult<Vec<&'a str>> {
    let mut output = Vec::with_capacity(words.len());
    let mut stack: Vec<Option<BinaryOperator>> = Vec::new();

    for &word in words {
        if is_digits(word) {
            output.push(word);
        } else if word == "(" {
            stack.push(None);
        } else if word == ")" {
            loop {
                match stack.pop() {
                    Some(Some(op)) => output.push(op.symbol()),
                    Some(None) => break,
                    None => return Err(ParseError::UnmatchedParenthesis),
                }
            }
        } else if let Some(op) = BinaryOperator::from_symbol(word) {
            while let Some(Some(top)) = stack.last()
                  && top.precedence() > op.precedence()
            {
                output.push(top.symbol());
                stack.pop();
            }
            stack.push(Some(op));
        } else {
            return Err(ParseError::UnexpectedToken { token: word.to_string() });
        }
    }

    while let Some(entry) = stack.pop() {
        let op = entry.ok_or(ParseError::UnmatchedParenthesis)?;
        output.push(op.symbol());
    }

    Ok(output)
}

fn reverse_swapping_parens<'a>(words: &[&'a str]) -> Vec<&'a str> {
    words.iter()
         .rev()
         .map(|&word| match word {
             "(" => ")",
             ")" => "(",
             _ => word,
         })
         .collect()
}

use exptree::{
    ExpressionTree,
    error::ParseError,
    interpreter::{notation::Notation, parser::MAX_NESTING},
};

fn assert_forms(src: &str, notation: Notation, prefix: &str, postfix: &str, infix: &str) {
    let tree = ExpressionTree::parse(src);
    assert!(tree.is_valid(), "{src:?} was rejected: {:?}", tree.error());
    assert_eq!(tree.notation(), Some(notation), "notation of {src:?}");
    assert_eq!(tree.prefix(), prefix);
    assert_eq!(tree.postfix(), postfix);
    assert_eq!(tree.infix(), infix);
}

fn parse_error(src: &str) -> ParseError {
    ExpressionTree::parse(src).error()
                              .cloned()
                              .unwrap_or_else(|| panic!("{src:?} should not parse"))
}

#[test]
fn one_plus_one_in_every_notation() {
    assert_forms("+ 1 1", Notation::Prefix, "+ 1 1", "1 1 +", "(1+1)");
    assert_forms("1 1 +", Notation::Postfix, "+ 1 1", "1 1 +", "(1+1)");
    assert_forms("1+1", Notation::Infix, "+ 1 1", "1 1 +", "(1+1)");
    assert_forms("(1+1)", Notation::Infix, "+ 1 1", "1 1 +", "(1+1)");
}

#[test]
fn unspaced_input_starting_with_an_operator_is_infix() {
    assert_forms("+(1)2", Notation::Infix, "+ 1 2", "1 2 +", "(1+2)");
    assert_forms("-(5)3", Notation::Infix, "- 5 3", "5 3 -", "(5-3)");
    assert_forms("*(3)(4)", Notation::Infix, "* 3 4", "3 4 *", "(3*4)");
    assert_eq!(parse_error("+(1) 2"), ParseError::UnknownNotation);
}

#[test]
fn larger_expressions_print_canonically() {
    assert_forms("8 7 * 4 + 5 * 2 2 + 3 7 * * +",
                 Notation::Postfix,
                 "+ * + * 8 7 4 5 * + 2 2 * 3 7",
                 "8 7 * 4 + 5 * 2 2 + 3 7 * * +",
                 "((((8*7)+4)*5)+((2+2)*(3*7)))");
    assert_forms("2^3^2", Notation::Infix, "^ ^ 2 3 2", "2 3 ^ 2 ^", "((2^3)^2)");
    assert_forms("1+2*3", Notation::Infix, "+ 1 * 2 3", "1 2 3 * +", "(1+(2*3))");
}

#[test]
fn spacing_and_leading_zeros_are_normalised() {
    assert_forms("  +   1    1  ", Notation::Prefix, "+ 1 1", "1 1 +", "(1+1)");
    assert_forms("+ 007 1", Notation::Prefix, "+ 7 1", "7 1 +", "(7+1)");
    assert_forms("42", Notation::Prefix, "42", "42", "42");
}

#[test]
fn status_messages() {
    assert_eq!(ExpressionTree::parse("+ 1 1").status_message(),
               "Input detected as prefix notation.");
    assert_eq!(ExpressionTree::parse("1+1").status_message(),
               "Input detected as infix notation.");
    assert_eq!(ExpressionTree::parse("1 1 +").status_message(),
               "Input detected as postfix notation.");
    assert_eq!(ExpressionTree::parse("").status_message(), "No input detected.");
    assert_eq!(ExpressionTree::parse("54-").status_message(),
               "Input does not match prefix, infix, or postfix notation.");
    assert_eq!(ExpressionTree::parse("54-").notation_message(), None);
}

#[test]
fn printers_on_empty_and_invalid_trees() {
    let empty = ExpressionTree::parse("");
    assert_eq!(empty.prefix(), "Tree is empty; nothing to see here.");
    assert_eq!(empty.postfix(), "Tree is empty; nothing to see here.");
    assert_eq!(empty.infix(), "Tree is empty; nothing to see here.");

    let invalid = ExpressionTree::parse("-54");
    assert_eq!(invalid.prefix(), "Invalid expression; can't convert to prefix.");
    assert_eq!(invalid.postfix(), "Invalid expression; can't convert to postfix.");
    assert_eq!(invalid.infix(), "Invalid expression; can't convert to infix.");
}

#[test]
fn each_failure_reports_its_cause() {
    assert_eq!(parse_error("23f"),
               ParseError::InvalidCharacter { found: "f".to_string() });
    assert_eq!(parse_error("1.2"),
               ParseError::InvalidCharacter { found: ".".to_string() });
    assert_eq!(parse_error("1 1"), ParseError::UnknownNotation);
    assert_eq!(parse_error("+ 1"), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_error("-54"), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_error("+ 1 2 3"),
               ParseError::UnexpectedTrailingTokens { token: "3".to_string() });
    assert_eq!(parse_error("1 1 + +"),
               ParseError::MissingOperand { operator: "+".to_string() });
    assert_eq!(parse_error("1 2 3 +"), ParseError::DanglingOperands { count: 2 });
    assert_eq!(parse_error("(1+2"), ParseError::UnmatchedParenthesis);
    assert_eq!(parse_error("1+2)"), ParseError::UnmatchedParenthesis);
    assert_eq!(parse_error("+ (1 2"),
               ParseError::UnexpectedToken { token: "(1".to_string() });
    assert_eq!(parse_error("2147483648"),
               ParseError::LiteralOutOfRange { literal: "2147483648".to_string() });
    assert_eq!(parse_error(&format!("{}1", "^ 1 ".repeat(MAX_NESTING + 1))),
               ParseError::NestingTooDeep { limit: MAX_NESTING });
}

#[test]
fn refilling_replaces_the_previous_expression() {
    let mut tree = ExpressionTree::parse("23f");
    assert!(!tree.is_valid());

    tree.fill("* 2 3");
    assert!(tree.is_valid());
    assert!(tree.error().is_none());
    assert_eq!(tree.prefix(), "* 2 3");

    tree.fill("");
    assert!(tree.is_valid());
    assert!(tree.is_empty());
    assert_eq!(tree.notation(), Some(Notation::Empty));
}

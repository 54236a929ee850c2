//! # exptree
//!
//! exptree turns an arithmetic expression into a binary expression tree. The
//! input may be written in prefix (`+ 1 1`), postfix (`1 1 +`) or infix
//! (`(1+1)`) notation; the notation is detected automatically. The tree can
//! be printed in all three notations, evaluated over 32-bit integers with
//! overflow detection, drawn as ASCII art and explained step by step.
//!
//! Expressions use non-negative integer literals and the binary operators
//! `+ - * / ^ %`. Division is integer division.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of expression trees.
///
/// This module declares the `ExprNode` enum and the `BinaryOperator` it
/// combines operands with, along with the prefix, postfix and infix printers.
///
/// # Responsibilities
/// - Models strict binary trees over integer literals.
/// - Caches the value computed for each operator node.
/// - Serializes trees back to text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Every failure is recoverable: parse errors leave an empty, invalid tree
/// and evaluation errors are collected as diagnostics.
pub mod error;
/// Orchestrates the processing of an expression.
///
/// This module ties together lexing, notation detection, conversion, tree
/// building, evaluation, drawing and instruction generation.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

pub use interpreter::tree::ExpressionTree;

/// Builds a tree from `input` and returns the full walkthrough for it.
///
/// The report starts with the detected notation, then lists the prefix,
/// postfix and infix forms, the final value (or the diagnostics explaining
/// why there is none), the drawing and the instructions.
///
/// # Examples
/// ```
/// use exptree::report;
///
/// let text = report("+ 1 1");
/// assert!(text.starts_with("Input detected as prefix notation."));
/// assert!(text.contains("Infix:       (1+1)"));
/// assert!(text.contains("Final value: 2\n"));
///
/// let text = report("23f");
/// assert!(text.contains("Final value: Invalid expression; can't evaluate."));
/// ```
#[must_use]
pub fn report(input: &str) -> String {
    let mut tree = ExpressionTree::parse(input);

    let status = tree.status_message();
    let prefix = tree.prefix();
    let postfix = tree.postfix();
    let infix = tree.infix();

    let result = tree.eval();
    let mut value: String = tree.take_diagnostics()
                                .iter()
                                .map(|diagnostic| format!("{diagnostic}\n"))
                                .collect();
    if tree.is_valid() && !tree.has_overflowed() {
        value.push_str(&format!("{result}\n"));
    }

    let drawing = tree.to_string();
    let instructions = tree.instruct();

    format!("{status}\n\nPrefix:      {prefix}\nPostfix:     {postfix}\nInfix:       \
             {infix}\n\nFinal value: {value}\nDrawing:\n\n{drawing}\n\nInstructions:\n\n\
             {instructions}")
}

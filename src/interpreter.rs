/// Conversion of infix and postfix word streams into prefix.
///
/// Prefix is the canonical form every tree is built from, so the other two
/// notations are rewritten into it before building.
pub mod converter;
/// ASCII rendering of trees.
///
/// Lays a tree out on a fixed 16 × 80 canvas, five levels deep, marking
/// whatever does not fit with `X`.
pub mod drawing;
/// Post-order evaluation with overflow and zero-divisor detection.
///
/// Results are cached on the nodes so the drawing and the instructions can
/// show them afterwards.
pub mod evaluator;
/// Natural-language walkthrough of an evaluated tree.
pub mod instructor;
/// The lexer validates the input alphabet and splits infix text into words.
///
/// # Responsibilities
/// - Rejects any character outside digits, operators, parentheses and space.
/// - Separates numbers, operators and parentheses written without spaces.
pub mod lexer;
/// Detection of the notation an input is written in.
pub mod notation;
/// Builds trees from prefix word streams.
///
/// # Responsibilities
/// - Consumes the stream through one cursor in pre-order.
/// - Validates literals against the 32-bit signed range.
/// - Rejects streams that are too short or have words left over.
pub mod parser;
/// The `ExpressionTree` aggregate tying parsing, printing, evaluation,
/// drawing and instructions together.
pub mod tree;

/// Infix to prefix conversion.
///
/// Reverses the infix words with their parentheses swapped, runs the
/// shunting-yard algorithm to obtain postfix, then reverses again.
pub mod infix;
/// Postfix to prefix conversion.
///
/// A single stack pass that folds each operator with its two operands into
/// one prefix fragment.
pub mod postfix;

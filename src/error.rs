/// Parsing errors.
///
/// Defines every way an input string can fail to become a tree: disallowed
/// characters, unrecognised notation, structural malformation found while
/// converting or building, and literals that do not fit the integer type.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the conditions reported while evaluating a tree: integer
/// overflow, division or modulo by zero, and attempts to evaluate an invalid
/// expression.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

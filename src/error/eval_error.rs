use crate::ast::BinaryOperator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the conditions reported while evaluating a tree.
///
/// Overflow leaves the expression valid with a clamped value; every other
/// variant invalidates it.
pub enum EvalError {
    /// An operation's result does not fit a 32-bit signed integer.
    Overflow {
        /// The operator whose result overflowed.
        op: BinaryOperator,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// Modulo with a zero divisor.
    ModuloByZero,
    /// Evaluation was requested on an expression that failed to parse.
    InvalidExpression,
}

impl EvalError {
    /// Returns `true` for conditions that make the whole expression invalid.
    #[must_use]
    pub const fn invalidates(self) -> bool {
        !matches!(self, Self::Overflow { .. })
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { .. } => write!(f, "Integer overflow; can't evaluate."),
            Self::DivisionByZero => write!(f, "Error: division by zero"),
            Self::ModuloByZero => write!(f, "Error: modulo by zero"),
            Self::InvalidExpression => write!(f, "Invalid expression; can't evaluate."),
        }
    }
}

impl std::error::Error for EvalError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning an input string into a
/// tree.
pub enum ParseError {
    /// The input contains a character outside `0-9 + - * / ^ % ( )` and space.
    InvalidCharacter {
        /// The offending text.
        found: String,
    },
    /// The input matches none of the prefix, infix or postfix patterns.
    UnknownNotation,
    /// The token stream ended while an operand was still expected.
    UnexpectedEndOfInput,
    /// A postfix operator found fewer than two operands on the stack.
    MissingOperand {
        /// The operator that was short of operands.
        operator: String,
    },
    /// A postfix expression left more than one operand behind.
    DanglingOperands {
        /// The number of entries left on the stack.
        count: usize,
    },
    /// An infix expression has a `(` or `)` without its partner.
    UnmatchedParenthesis,
    /// Found a token that is neither a literal nor an operator.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// A literal does not fit a 32-bit signed integer.
    LiteralOutOfRange {
        /// The literal as written.
        literal: String,
    },
    /// Operators are nested deeper than the tree builder allows.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// Found extra tokens after the expression was complete.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { found } => {
                write!(f, "Invalid character '{found}' in input.")
            },
            Self::UnknownNotation => write!(f, "Input matches no known notation."),
            Self::UnexpectedEndOfInput => {
                write!(f, "Unexpected end of input; an operand is missing.")
            },
            Self::MissingOperand { operator } => {
                write!(f, "Operator '{operator}' is missing an operand.")
            },
            Self::DanglingOperands { count } => write!(f,
                                                       "{count} operands were left over without an operator."),
            Self::UnmatchedParenthesis => write!(f, "Unmatched parenthesis."),
            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token}."),
            Self::LiteralOutOfRange { literal } => {
                write!(f, "Literal {literal} is too large.")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "Expression nests more than {limit} operators deep.")
            },
            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}

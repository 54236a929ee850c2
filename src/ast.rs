/// Represents one of the six binary operators of the grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Every operator, in symbol order `+ - * / ^ %`.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow, Self::Mod];

    /// Maps a word to its operator.
    ///
    /// Only the bare one-character symbols are accepted; `"+5"` or `"++"` are
    /// not operators.
    ///
    /// # Example
    /// ```
    /// use exptree::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("^"), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_symbol("+5"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(word: &str) -> Option<Self> {
        match word {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            "%" => Some(Self::Mod),
            _ => None,
        }
    }

    /// Returns the operator's symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
        }
    }

    /// Binding strength used by the infix converter.
    ///
    /// `+ -` bind weakest, `* / %` in the middle and `^` strongest.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow => 3,
        }
    }

    /// The noun used when narrating the result of this operator.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Add => "addition result",
            Self::Sub => "subtraction result",
            Self::Mul => "multiplication result",
            Self::Div => "division result",
            Self::Pow => "exponentiation result",
            Self::Mod => "modulus result",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of a binary expression tree.
///
/// Leaves hold non-negative literals. Operator nodes own both children and
/// cache the value computed for them by the last evaluation pass, which the
/// drawing and the instructions read back afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode {
    /// A literal operand.
    Literal {
        /// The literal's value.
        value: i32,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Value cached by evaluation; zero until the tree is evaluated.
        value: i32,
    },
}

impl ExprNode {
    /// Creates an unevaluated operator node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right),
                         value: 0 }
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// Returns the literal value, or the cached value of an operator node.
    #[must_use]
    pub const fn value(&self) -> i32 {
        match self {
            Self::Literal { value } | Self::BinaryOp { value, .. } => *value,
        }
    }

    /// Text shown for this node: the operator symbol or the decimal literal.
    ///
    /// # Example
    /// ```
    /// use exptree::ast::{BinaryOperator, ExprNode};
    ///
    /// let node = ExprNode::binary(BinaryOperator::Mod,
    ///                             ExprNode::Literal { value: 7 },
    ///                             ExprNode::Literal { value: 3 });
    /// assert_eq!(node.label(), "%");
    /// assert_eq!(ExprNode::Literal { value: 42 }.label(), "42");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Literal { value } => value.to_string(),
            Self::BinaryOp { op, .. } => op.symbol().to_string(),
        }
    }

    /// The noun used when narrating this node's value.
    #[must_use]
    pub const fn noun(&self) -> &'static str {
        match self {
            Self::Literal { .. } => "value",
            Self::BinaryOp { op, .. } => op.noun(),
        }
    }

    /// Number of levels below and including this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of operator nodes in this subtree.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        match self {
            Self::Literal { .. } => 0,
            Self::BinaryOp { left, right, .. } => {
                1 + left.operation_count() + right.operation_count()
            },
        }
    }

    /// Prefix notation, single-space separated.
    #[must_use]
    pub fn to_prefix(&self) -> String {
        match self {
            Self::Literal { value } => value.to_string(),
            Self::BinaryOp { op, left, right, .. } => {
                format!("{op} {} {}", left.to_prefix(), right.to_prefix())
            },
        }
    }

    /// Postfix notation, single-space separated.
    #[must_use]
    pub fn to_postfix(&self) -> String {
        match self {
            Self::Literal { value } => value.to_string(),
            Self::BinaryOp { op, left, right, .. } => {
                format!("{} {} {op}", left.to_postfix(), right.to_postfix())
            },
        }
    }

    /// Infix notation with every operation wrapped in parentheses.
    ///
    /// # Example
    /// ```
    /// use exptree::ast::{BinaryOperator, ExprNode};
    ///
    /// let one = || ExprNode::Literal { value: 1 };
    /// let node = ExprNode::binary(BinaryOperator::Add, one(), one());
    /// assert_eq!(node.to_infix(), "(1+1)");
    /// ```
    #[must_use]
    pub fn to_infix(&self) -> String {
        match self {
            Self::Literal { value } => value.to_string(),
            Self::BinaryOp { op, left, right, .. } => {
                format!("({}{op}{})", left.to_infix(), right.to_infix())
            },
        }
    }
}

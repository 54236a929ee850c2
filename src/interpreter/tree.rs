use log::debug;

use crate::{
    ast::ExprNode,
    error::{EvalError, ParseError},
    interpreter::{
        drawing::{Drawing, render},
        evaluator::Evaluator,
        instructor::instruct,
        lexer::validate,
        notation::Notation,
        parser::{ParseResult, parse_prefix},
    },
};

const EMPTY_TREE: &str = "Tree is empty; nothing to see here.";
const NO_MATCH: &str = "Input does not match prefix, infix, or postfix notation.";

/// A binary expression tree together with the state of its last parse and
/// evaluation.
///
/// All flags belong to the instance and are reset together by
/// [`ExpressionTree::fill`]. Every query answers with a string or number even
/// when the expression is invalid, so callers can print results verbatim.
///
/// # Example
/// ```
/// use exptree::ExpressionTree;
///
/// let mut tree = ExpressionTree::parse("((((8*7)+4)*5)+((2+2)*(3*7)))");
///
/// assert_eq!(tree.prefix(), "+ * + * 8 7 4 5 * + 2 2 * 3 7");
/// assert_eq!(tree.eval(), 384);
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionTree {
    root:        Option<ExprNode>,
    valid:       bool,
    evaluated:   bool,
    overflowed:  bool,
    notation:    Option<Notation>,
    error:       Option<ParseError>,
    diagnostics: Vec<EvalError>,
}

impl Default for ExpressionTree {
    fn default() -> Self {
        Self { root:        None,
               valid:       true,
               evaluated:   false,
               overflowed:  false,
               notation:    None,
               error:       None,
               diagnostics: Vec::new(), }
    }
}

impl ExpressionTree {
    /// Creates an empty, valid tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree from an expression in any supported notation.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut tree = Self::new();
        tree.fill(input);
        tree
    }

    /// Replaces the tree with one parsed from `input`, resetting every flag.
    ///
    /// Failures leave the tree empty and invalid; the cause is available
    /// through [`ExpressionTree::error`].
    pub fn fill(&mut self, input: &str) {
        *self = Self::new();

        match Self::build(input) {
            Ok((notation, root)) => {
                self.notation = Some(notation);
                self.root = root;
            },
            Err(error) => {
                debug!("rejected {input:?}: {error}");
                self.valid = false;
                self.error = Some(error);
            },
        }
    }

    fn build(input: &str) -> ParseResult<(Notation, Option<ExprNode>)> {
        validate(input)?;

        let input = input.trim();
        let notation = Notation::detect(input)?;
        if notation == Notation::Empty {
            return Ok((notation, None));
        }

        let root = parse_prefix(notation.to_prefix(input)?)?;
        Ok((notation, Some(root)))
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub const fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    #[must_use]
    pub const fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[must_use]
    pub const fn root(&self) -> Option<&ExprNode> {
        self.root.as_ref()
    }

    /// The notation detected by the last successful parse.
    #[must_use]
    pub const fn notation(&self) -> Option<Notation> {
        self.notation
    }

    /// The sentence announcing the detected notation, if parsing succeeded.
    #[must_use]
    pub fn notation_message(&self) -> Option<&'static str> {
        self.notation.map(Notation::message)
    }

    /// One line describing the outcome of the last parse.
    #[must_use]
    pub fn status_message(&self) -> &'static str {
        if self.error.is_some() {
            NO_MATCH
        } else {
            self.notation.unwrap_or(Notation::Empty).message()
        }
    }

    /// Why the last parse failed, if it did.
    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Evaluation messages raised so far, oldest first.
    #[must_use]
    pub fn diagnostics(&self) -> &[EvalError] {
        &self.diagnostics
    }

    /// Removes and returns the evaluation messages raised so far.
    pub fn take_diagnostics(&mut self) -> Vec<EvalError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// The expression in prefix notation.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.print("prefix", ExprNode::to_prefix)
    }

    /// The expression in postfix notation.
    #[must_use]
    pub fn postfix(&self) -> String {
        self.print("postfix", ExprNode::to_postfix)
    }

    /// The expression in fully parenthesized infix notation.
    #[must_use]
    pub fn infix(&self) -> String {
        self.print("infix", ExprNode::to_infix)
    }

    fn print(&self, notation: &str, printer: fn(&ExprNode) -> String) -> String {
        if !self.valid {
            return format!("Invalid expression; can't convert to {notation}.");
        }
        self.root.as_ref().map_or_else(|| EMPTY_TREE.to_string(), printer)
    }

    /// Evaluates the expression, recording overflow and zero-divisor
    /// diagnostics.
    ///
    /// Returns zero when the expression is invalid, empty or overflowed;
    /// query [`ExpressionTree::is_valid`] and
    /// [`ExpressionTree::has_overflowed`] to tell these apart from a genuine
    /// zero.
    pub fn eval(&mut self) -> i32 {
        self.evaluate(true)
    }

    fn evaluate(&mut self, report_overflow: bool) -> i32 {
        self.overflowed = false;

        if !self.valid {
            if report_overflow {
                self.diagnostics.push(EvalError::InvalidExpression);
            }
            return 0;
        }

        self.evaluated = true;
        let Some(root) = self.root.as_mut() else {
            return 0;
        };

        let mut evaluator = Evaluator::new(report_overflow);
        let result = evaluator.eval(root);
        self.overflowed = evaluator.overflowed();
        self.valid = evaluator.is_valid();
        self.diagnostics.extend(evaluator.into_diagnostics());

        if self.overflowed || !self.valid { 0 } else { result }
    }

    /// Draws the tree, or returns `None` when it is invalid or empty.
    #[must_use]
    pub fn drawing(&self) -> Option<Drawing> {
        if !self.valid {
            return None;
        }
        self.root
            .as_ref()
            .map(|root| render(root, self.evaluated, self.overflowed))
    }

    /// Explains in words how to evaluate the expression, evaluating it
    /// silently first if needed.
    pub fn instruct(&mut self) -> String {
        if !self.evaluated {
            self.evaluate(false);
        }

        if self.overflowed {
            return "Integer overflow; I guess you've gotta do it by hand.".to_string();
        }
        if !self.valid {
            return "Invalid expression; you're on your own, kid.".to_string();
        }
        self.root.as_ref().map_or_else(|| {
                                           "Take nothing and do nothing to it; you get nothing."
                                               .to_string()
                                       },
                                       instruct)
    }
}

impl std::fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.valid {
            return write!(f, "Invalid expression; can't draw a tree.");
        }
        match self.drawing() {
            Some(drawing) => write!(f, "{drawing}"),
            None => write!(f, "{EMPTY_TREE}"),
        }
    }
}

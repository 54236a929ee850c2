use log::warn;

use crate::{
    ast::{BinaryOperator, ExprNode},
    error::EvalError,
    util::num::{OVERFLOW_SENTINEL, pow_truncated},
};

/// State of one evaluation pass over a tree.
///
/// The pass walks the tree in post-order and stores each operator node's
/// result in the node itself. Overflow clamps the result to
/// [`OVERFLOW_SENTINEL`] and raises a flag; once raised, any operator with a
/// sentinel operand yields the sentinel without computing anything.
/// Division or modulo by zero yields zero for that node and invalidates the
/// expression.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Whether overflow is reported as a diagnostic.
    report_overflow: bool,
    overflowed:      bool,
    diagnostics:     Vec<EvalError>,
}

impl Evaluator {
    /// Creates a pass. Zero divisors are always reported; overflow only when
    /// `report_overflow` is set.
    #[must_use]
    pub fn new(report_overflow: bool) -> Self {
        Self { report_overflow,
               ..Self::default() }
    }

    /// Evaluates `node` and its descendants, caching every operator result.
    ///
    /// # Example
    /// ```
    /// use exptree::{interpreter::{evaluator::Evaluator, parser::parse_prefix}};
    ///
    /// let mut tree = parse_prefix(["*", "+", "1", "2", "3"]).unwrap();
    /// let mut evaluator = Evaluator::new(true);
    ///
    /// assert_eq!(evaluator.eval(&mut tree), 9);
    /// assert!(evaluator.is_valid());
    /// assert!(!evaluator.overflowed());
    /// ```
    pub fn eval(&mut self, node: &mut ExprNode) -> i32 {
        match node {
            ExprNode::Literal { value } => *value,
            ExprNode::BinaryOp { op,
                                 left,
                                 right,
                                 value, } => {
                let a = self.eval(left);
                let b = self.eval(right);

                *value = if self.overflowed && (a == OVERFLOW_SENTINEL || b == OVERFLOW_SENTINEL) {
                    OVERFLOW_SENTINEL
                } else {
                    self.apply(*op, a, b)
                };
                *value
            },
        }
    }

    fn apply(&mut self, op: BinaryOperator, a: i32, b: i32) -> i32 {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => a.checked_add(b).unwrap_or_else(|| self.overflow(op)),
            Sub => a.checked_add(b.wrapping_neg())
                    .unwrap_or_else(|| self.overflow(op)),
            Mul => a.checked_mul(b).unwrap_or_else(|| self.overflow(op)),
            Div => {
                if b == 0 {
                    self.report(EvalError::DivisionByZero);
                    return 0;
                }
                a.wrapping_div(b)
            },
            Mod => {
                if b == 0 {
                    self.report(EvalError::ModuloByZero);
                    return 0;
                }
                a.wrapping_rem(b)
            },
            Pow => {
                // Saturation is the only overflow signal available here, so an
                // exact result of i32::MAX is flagged too.
                let result = pow_truncated(a, b);
                if result == OVERFLOW_SENTINEL {
                    self.overflow(op);
                }
                result
            },
        }
    }

    fn overflow(&mut self, op: BinaryOperator) -> i32 {
        self.overflowed = true;
        if self.report_overflow {
            self.report(EvalError::Overflow { op });
        }
        OVERFLOW_SENTINEL
    }

    fn report(&mut self, error: EvalError) {
        warn!("{error}");
        self.diagnostics.push(error);
    }

    /// Whether any operation overflowed during this pass.
    #[must_use]
    pub const fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Whether the pass finished without a zero divisor.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|error| error.invalidates())
    }

    /// Consumes the pass, returning its diagnostics in the order they were
    /// raised.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<EvalError> {
        self.diagnostics
    }
}

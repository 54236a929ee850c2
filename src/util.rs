/// Numeric helpers shared by the parser and the evaluator.
///
/// This module holds the overflow sentinel, the literal check used by the
/// notation classifier and the converters, and the truncating power routine
/// the evaluator relies on for `^`.
pub mod num;

/// Largest value an expression can hold.
///
/// Evaluation clamps overflowing results to this value, and once overflow
/// has been flagged any operand equal to it is treated as "too big".
pub const OVERFLOW_SENTINEL: i32 = i32::MAX;

/// Returns `true` if `word` is a non-empty run of ASCII digits.
///
/// # Example
/// ```
/// use exptree::util::num::is_digits;
///
/// assert!(is_digits("2147483648"));
/// assert!(!is_digits("-54"));
/// assert!(!is_digits("1.2"));
/// assert!(!is_digits(""));
/// ```
#[must_use]
pub fn is_digits(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Raises `base` to `exponent` in floating point and truncates the result.
///
/// The conversion back to `i32` saturates: results beyond the integer range
/// become `i32::MAX` or `i32::MIN`, `NaN` becomes zero and fractional results
/// (negative exponents) truncate towards zero.
///
/// # Example
/// ```
/// use exptree::util::num::pow_truncated;
///
/// assert_eq!(pow_truncated(2, 10), 1024);
/// assert_eq!(pow_truncated(2, 40), i32::MAX);
/// assert_eq!(pow_truncated(2, -1), 0);
/// assert_eq!(pow_truncated(0, -1), i32::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn pow_truncated(base: i32, exponent: i32) -> i32 {
    f64::from(base).powf(f64::from(exponent)) as i32
}

//! Truncating signed integer division that never panics.
//!
//! Native `/` on integers aborts on a zero divisor and on `i64::MIN / -1`;
//! this module routes both conditions into [`DivideError`] instead, so the
//! operation always returns control to the caller with a usable outcome.

use crate::error::DivideError;

/// Computes the truncating integer quotient of `dividend` and `divisor`.
///
/// The quotient's fractional part is discarded toward zero (not floored),
/// matching native integer division semantics: `divide(-7, 2)` is `Ok(-3)`,
/// not `Ok(-4)`.
///
/// The operation is pure and deterministic; repeated calls with identical
/// operands yield identical results.
///
/// # Errors
///
/// - [`DivideError::DivisionByZero`] when `divisor` is zero. No arithmetic
///   is attempted.
/// - [`DivideError::Overflow`] for the single operand pair whose quotient
///   exceeds `i64::MAX`, namely `i64::MIN / -1`.
///
/// # Examples
///
/// ```
/// use quotient::{DivideError, divide};
///
/// assert_eq!(divide(10, 2), Ok(5));
/// assert_eq!(divide(0, 5), Ok(0));
/// assert_eq!(divide(10, 0), Err(DivideError::DivisionByZero));
/// assert_eq!(
///     divide(i64::MIN, -1),
///     Err(DivideError::Overflow { dividend: i64::MIN, divisor: -1 }),
/// );
/// ```
pub const fn divide(dividend: i64, divisor: i64) -> Result<i64, DivideError> {
    if divisor == 0 {
        return Err(DivideError::DivisionByZero);
    }
    // checked_div only reports None for the zero divisor (handled above)
    // and the i64::MIN / -1 overflow pair.
    match dividend.checked_div(divisor) {
        Some(quotient) => Ok(quotient),
        None => Err(DivideError::Overflow { dividend, divisor }),
    }
}

#[cfg(test)]
mod tests {
    //! Covers truncation semantics and both failure modes.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(10, 2, 5)]
    #[case(0, 5, 0)]
    #[case(9, 3, 3)]
    #[case(-7, 2, -3)] // Truncated toward zero
    #[case(7, -2, -3)]
    #[case(-7, -2, 3)]
    #[case(1, 2, 0)]
    #[case(i64::MIN, 1, i64::MIN)]
    #[case(i64::MAX, -1, -i64::MAX)]
    fn divides_and_truncates_toward_zero(
        #[case] dividend: i64,
        #[case] divisor: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(divide(dividend, divisor), Ok(expected));
    }

    #[rstest]
    #[case(10)]
    #[case(0)]
    #[case(-10)]
    #[case(i64::MIN)]
    #[case(i64::MAX)]
    fn rejects_zero_divisor_for_any_dividend(#[case] dividend: i64) {
        assert_eq!(divide(dividend, 0), Err(DivideError::DivisionByZero));
    }

    #[test]
    fn reports_overflow_for_min_divided_by_negative_one() {
        assert_eq!(
            divide(i64::MIN, -1),
            Err(DivideError::Overflow {
                dividend: i64::MIN,
                divisor: -1,
            }),
        );
    }

    #[test]
    fn repeated_calls_yield_identical_outcomes() {
        let first = divide(10, 3);
        assert_eq!(first, divide(10, 3));
        assert_eq!(first, Ok(3));

        let failed = divide(10, 0);
        assert_eq!(failed, divide(10, 0));
    }
}

//! Error types for the division operation.
//!
//! The enum is deliberately closed: division has exactly two failure modes,
//! and both carry enough context to render a caller-facing diagnostic
//! without consulting any other state.

use thiserror::Error;

/// Errors that can occur when computing an integer quotient.
///
/// A [`crate::divide`] call returns either a quotient or one of these
/// variants, never both. The `Display` text for [`Self::DivisionByZero`] is
/// the fixed diagnostic `division by zero` that callers render verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivideError {
    /// The divisor was zero; no arithmetic was attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// The quotient does not fit in a 64-bit signed integer.
    ///
    /// This occurs for exactly one operand pair: `i64::MIN / -1`.
    #[error("quotient of {dividend} / {divisor} overflows a 64-bit integer")]
    Overflow {
        /// Dividend supplied by the caller.
        dividend: i64,
        /// Divisor supplied by the caller.
        divisor: i64,
    },
}

//! Checked truncating integer division with a typed outcome.
//!
//! This crate replaces the classic dual-channel calling convention — a
//! numeric return slot plus a writable error slot the caller is trusted to
//! check first — with a single `Result`. A division yields either a valid
//! quotient or a diagnostic, never both, so "used the value without checking
//! the error" is unrepresentable rather than merely discouraged.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`divide`], truncating (toward zero) signed division that never panics
//! - [`DivideError`], the semantic error enum covering the two failure modes
//! - [`demo_cli`], argument parsing and rendering for the demonstration
//!   binary, kept in the library so it is testable without spawning a
//!   process
//!
//! # Example
//!
//! ```
//! use quotient::{DivideError, divide};
//!
//! assert_eq!(divide(10, 2), Ok(5));
//! assert_eq!(divide(-7, 2), Ok(-3)); // truncated toward zero, not floored
//! assert_eq!(divide(10, 0), Err(DivideError::DivisionByZero));
//! ```

pub mod demo_cli;
mod divide;
mod error;

pub use divide::divide;
pub use error::DivideError;

//! CLI support for the division demonstration binary.
//!
//! This module provides parsing and rendering helpers for the demo CLI.
//! The binary delegates to these functions so they can be exercised in
//! tests without spawning a subprocess.
//!
//! With no operands the CLI replays the scripted demonstration — one
//! division that succeeds and one that fails — printing one line per
//! outcome. An explicit `<dividend> <divisor>` pair divides those operands
//! instead.

use thiserror::Error;

use crate::divide::divide;

/// Operand pairs replayed by the scripted demonstration.
const DEMONSTRATION_OPERANDS: [(i64, i64); 2] = [(10, 2), (10, 0)];

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed division request.
    Division(DivisionRequest),
}

/// A division the CLI has been asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionRequest {
    /// Replay the scripted demonstration operand pairs.
    Demonstration,
    /// Divide one caller-supplied operand pair.
    Single {
        /// Dividend supplied on the command line.
        dividend: i64,
        /// Divisor supplied on the command line.
        divisor: i64,
    },
}

/// Parses CLI arguments into a division request.
///
/// # Errors
///
/// Returns [`CliError`] when an argument is not recognised, an operand is
/// not a valid integer, or a dividend is supplied without a divisor.
///
/// # Example
///
/// ```
/// use quotient::demo_cli::{DivisionRequest, ParseOutcome, parse_args};
///
/// let args = vec!["10".to_string(), "2".to_string()];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert_eq!(
///     outcome,
///     ParseOutcome::Division(DivisionRequest::Single { dividend: 10, divisor: 2 }),
/// );
/// ```
pub fn parse_args<I>(args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut first_operand: Option<i64> = None;
    let mut second_operand: Option<i64> = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            value if value.starts_with("--") => {
                return Err(CliError::UnknownArgument { value: arg });
            }
            value => {
                if first_operand.is_none() {
                    first_operand = Some(parse_operand(value)?);
                } else if second_operand.is_none() {
                    second_operand = Some(parse_operand(value)?);
                } else {
                    return Err(CliError::SurplusOperand { value: arg });
                }
            }
        }
    }

    match (first_operand, second_operand) {
        (Some(dividend), Some(divisor)) => {
            Ok(ParseOutcome::Division(DivisionRequest::Single {
                dividend,
                divisor,
            }))
        }
        (Some(_), None) => Err(CliError::MissingDivisor),
        (None, _) => Ok(ParseOutcome::Division(DivisionRequest::Demonstration)),
    }
}

/// Runs one division and renders its outcome as a display line.
///
/// Successful divisions render as `Result: <value>`; failed divisions
/// render as `Error: <reason>`. Exactly one of the two forms is produced
/// for any operand pair.
///
/// # Example
///
/// ```
/// use quotient::demo_cli::render_line;
///
/// assert_eq!(render_line(10, 2), "Result: 5");
/// assert_eq!(render_line(10, 0), "Error: division by zero");
/// ```
#[must_use]
pub fn render_line(dividend: i64, divisor: i64) -> String {
    match divide(dividend, divisor) {
        Ok(value) => format!("Result: {value}"),
        Err(err) => format!("Error: {err}"),
    }
}

/// Renders the display lines for a division request.
///
/// The scripted demonstration produces one line per operand pair; a single
/// request produces exactly one line.
///
/// # Example
///
/// ```
/// use quotient::demo_cli::{DivisionRequest, demo_lines};
///
/// let lines = demo_lines(DivisionRequest::Demonstration);
///
/// assert_eq!(lines, vec!["Result: 5", "Error: division by zero"]);
/// ```
#[must_use]
pub fn demo_lines(request: DivisionRequest) -> Vec<String> {
    match request {
        DivisionRequest::Demonstration => DEMONSTRATION_OPERANDS
            .iter()
            .map(|&(dividend, divisor)| render_line(dividend, divisor))
            .collect(),
        DivisionRequest::Single { dividend, divisor } => {
            vec![render_line(dividend, divisor)]
        }
    }
}

fn parse_operand(value: &str) -> Result<i64, CliError> {
    value.parse::<i64>().map_err(|err| CliError::InvalidNumber {
        value: value.to_owned(),
        message: err.to_string(),
    })
}

/// Errors surfaced by the CLI parsing flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A dividend was supplied without a divisor.
    #[error("missing divisor operand; supply both <dividend> and <divisor>")]
    MissingDivisor,
    /// More than two operands were supplied.
    #[error("surplus operand: {value}")]
    SurplusOperand {
        /// Operand that exceeded the expected pair.
        value: String,
    },
    /// An unsupported flag was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// An operand failed to parse as a 64-bit signed integer.
    #[error("invalid integer operand '{value}' ({message})")]
    InvalidNumber {
        /// Raw operand supplied on the command line.
        value: String,
        /// Parser error message.
        message: String,
    },
}

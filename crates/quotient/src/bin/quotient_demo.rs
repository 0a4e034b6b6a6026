//! Demonstration harness for the quotient library.
//!
//! This binary delegates to `quotient::demo_cli` for parsing and rendering
//! logic, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use quotient::demo_cli::{CliError, ParseOutcome, demo_lines, parse_args};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Division(request) => {
            for line in demo_lines(request) {
                write_line(&line);
            }
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: quotient_demo [dividend divisor]\n",
        "\n",
        "With no operands, replays the scripted demonstration: divides 10\n",
        "by 2, then 10 by 0, printing one line per outcome.\n",
        "\n",
        "Options:\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_line(line: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{line}") {
        drop(err);
    }
}

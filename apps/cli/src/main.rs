//! # Quote Entry Point
//!
//! The setup lives in `lib.rs` so it can be tested; this only maps a failed
//! run to a non-zero exit code.

use std::process::ExitCode;

fn main() -> ExitCode {
    match quote_cli_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

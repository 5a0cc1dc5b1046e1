//! yaml-get: print a value from a YAML file by dot-separated key path.
//!
//! This is the entry point. It parses arguments, runs the lookup and prints
//! the result. Only missing arguments produce a non-zero exit code; every
//! lookup failure degrades to the caller's default.

mod cli;
mod document;
mod error;
mod exit_codes;
mod key_path;
mod logging;
mod lookup;
mod render;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(cli) = Cli::parse_positional(std::env::args_os()) else {
        eprintln!("{}", Cli::usage());
        return ExitCode::from(exit_codes::USAGE_ERROR as u8);
    };

    if let Err(e) = logging::init_tracing() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let result = lookup::lookup(cli.into_request());
    println!("{}", result.unwrap_or_default());

    ExitCode::from(exit_codes::SUCCESS as u8)
}

//! favgen CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! generation and exit with failure only for unexpected errors.
//! For programmatic use, prefer the library API (`favgen::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("An unexpected error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Command Line Interface (CLI) layer for favgen.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that prints a status line for
//! every outcome. It wires the source path to the library functionality
//! exposed via `favgen::api`.
//!
//! If you are embedding favgen into another application, prefer using
//! the high-level `favgen::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

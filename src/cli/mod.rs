//! Command-line interface
//!
//! Argument parsing and dispatch for the `jsonbox` binary.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};

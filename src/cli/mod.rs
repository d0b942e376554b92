//! CLI module for bookshelf
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server and run until exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliErrorCode, CliResult};

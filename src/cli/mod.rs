//! CLI module for motorpool
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};

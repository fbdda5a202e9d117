//! Sweeplog CLI library.
//!
//! This library provides the pieces behind the `sweeplog` binary: argument
//! parsing, configuration management, command execution, the interactive
//! report loop, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

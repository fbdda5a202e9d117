//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sweeplog - Report on room cleaning history.
#[derive(Debug, Parser)]
#[command(name = "sweeplog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Room file (RoomID,Length,Width)
    #[arg(long, global = true, env = "SWEEPLOG_ROOMS")]
    pub rooms: Option<PathBuf>,

    /// Cleaning log file (RoomID,Timestamp,PercentCompleted)
    #[arg(long, global = true, env = "SWEEPLOG_LOG")]
    pub log: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Canonical report text (default)
    Text,
    /// JSON format
    Json,
    /// Table format where a report has tabular data
    Table,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rooms ranked by how often they were cleaned
    Frequency(FrequencyArgs),

    /// Every room's cleanings, newest first
    Rooms,

    /// Square feet left before the vacuum bag is due
    Bag(TimestampArgs),

    /// Square feet cleaned since a point in time
    Coverage(TimestampArgs),

    /// Rooms with dimensions and cleaning counts
    Inventory,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive report mode
    Repl,
}

/// Arguments for the frequency command.
#[derive(Debug, Parser)]
pub struct FrequencyArgs {
    /// Number of rooms to list
    #[arg(allow_negative_numbers = true)]
    pub count: i64,
}

/// Arguments for commands taking a point in time.
#[derive(Debug, Parser)]
pub struct TimestampArgs {
    /// Date and time as MM/DD/YYYY HH:MM:SS (quote it)
    pub timestamp: String,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the active configuration
    Show,

    /// Remember the files given with --rooms and --log
    SetData,

    /// Restore the default configuration
    Reset,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}

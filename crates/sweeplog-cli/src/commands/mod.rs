//! Command implementations.

pub mod bag;
pub mod config;
pub mod coverage;
pub mod frequency;
pub mod inventory;
pub mod rooms;

pub use self::bag::execute_bag;
pub use self::config::execute_config;
pub use self::coverage::execute_coverage;
pub use self::frequency::execute_frequency;
pub use self::inventory::execute_inventory;
pub use self::rooms::execute_rooms;

use crate::cli::Command;
use crate::config::{Config, DataPaths};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sweeplog_engine::{CleaningManager, ReportManager};

/// Load both input files into a report manager using the configured bag capacity.
pub fn load_reports(config: &Config, paths: &DataPaths) -> Result<ReportManager> {
    let manager = CleaningManager::from_files(&paths.rooms, &paths.log)?;
    Ok(ReportManager::with_config(manager, config.report.clone()))
}

/// Run a report command against already loaded data.
///
/// `config` and `repl` are handled by the caller since they do not need data.
pub fn execute(cmd: Command, reports: &ReportManager, formatter: &Formatter) -> Result<()> {
    match cmd {
        Command::Frequency(args) => execute_frequency(args, reports, formatter),
        Command::Rooms => execute_rooms(reports, formatter),
        Command::Bag(args) => execute_bag(args, reports, formatter),
        Command::Coverage(args) => execute_coverage(args, reports, formatter),
        Command::Inventory => execute_inventory(reports, formatter),
        Command::Config(_) | Command::Repl => Err(CliError::InvalidInput(
            "This command is not available here".to_string(),
        )),
    }
}

/// Print a canonical report, keeping its text byte for byte.
pub(crate) fn print_report(report: &str) {
    if report.ends_with('\n') {
        print!("{}", report);
    } else {
        println!("{}", report);
    }
}

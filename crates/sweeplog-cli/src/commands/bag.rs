//! Vacuum bag command implementation.

use crate::cli::TimestampArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sweeplog_domain::parse_timestamp;
use sweeplog_engine::{ReportManager, INVALID_TIMESTAMP};

use super::print_report;

/// Execute the bag command.
pub fn execute_bag(args: TimestampArgs, reports: &ReportManager, formatter: &Formatter) -> Result<()> {
    match formatter.format() {
        OutputFormat::Json => {
            let last_replaced = parse_timestamp(&args.timestamp)
                .map_err(|_| CliError::InvalidInput(INVALID_TIMESTAMP.to_string()))?;
            let status = reports.bag_status(last_replaced);
            println!("{}", formatter.bag_json(&args.timestamp, &status)?);
        }
        OutputFormat::Text | OutputFormat::Table => {
            print_report(&reports.vacuum_bag_report(&args.timestamp))
        }
    }

    Ok(())
}

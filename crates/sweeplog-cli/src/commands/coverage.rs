//! Coverage command implementation.

use crate::cli::TimestampArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sweeplog_domain::parse_timestamp;
use sweeplog_engine::{ReportManager, INVALID_TIMESTAMP};

/// Execute the coverage command.
pub fn execute_coverage(
    args: TimestampArgs,
    reports: &ReportManager,
    formatter: &Formatter,
) -> Result<()> {
    let cutoff = match parse_timestamp(&args.timestamp) {
        Ok(cutoff) => cutoff,
        Err(_) if formatter.format() != OutputFormat::Json => {
            println!("{}", INVALID_TIMESTAMP);
            return Ok(());
        }
        Err(_) => return Err(CliError::InvalidInput(INVALID_TIMESTAMP.to_string())),
    };

    let sq_ft = reports.manager().coverage_since(cutoff);
    println!("{}", formatter.coverage(&args.timestamp, sq_ft)?);

    Ok(())
}

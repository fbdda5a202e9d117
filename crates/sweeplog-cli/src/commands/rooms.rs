//! Room history command implementation.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use sweeplog_engine::ReportManager;

use super::print_report;

/// Execute the rooms command.
pub fn execute_rooms(reports: &ReportManager, formatter: &Formatter) -> Result<()> {
    match formatter.format() {
        OutputFormat::Json => {
            let index = reports.manager().events_by_room();
            println!("{}", formatter.history_json(&index)?);
        }
        OutputFormat::Text | OutputFormat::Table => print_report(&reports.room_report()),
    }

    Ok(())
}

//! Frequency command implementation.

use crate::cli::FrequencyArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sweeplog_engine::{ReportManager, INVALID_ROOM_COUNT, NOTHING_CLEANED};

use super::print_report;

/// Execute the frequency command.
pub fn execute_frequency(
    args: FrequencyArgs,
    reports: &ReportManager,
    formatter: &Formatter,
) -> Result<()> {
    if formatter.format() == OutputFormat::Text {
        print_report(&reports.frequency_report(args.count));
        return Ok(());
    }

    let count = usize::try_from(args.count)
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| CliError::InvalidInput(INVALID_ROOM_COUNT.to_string()))?;
    if reports.manager().events_by_room().is_empty() {
        return Err(CliError::NothingToReport(NOTHING_CLEANED));
    }
    let ranking = reports.manager().top_rooms(count);

    match formatter.format() {
        OutputFormat::Json => println!("{}", formatter.frequency_json(&ranking)?),
        _ => println!("{}", formatter.frequency_table(&ranking)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeplog_domain::Room;
    use sweeplog_engine::CleaningManager;

    fn execute(count: i64, reports: &ReportManager, format: OutputFormat) -> Result<()> {
        execute_frequency(FrequencyArgs { count }, reports, &Formatter::new(format, false))
    }

    #[test]
    fn test_no_rooms_is_nothing_cleaned_in_every_format() {
        let reports = ReportManager::new(CleaningManager::new(vec![], vec![]));

        assert!(execute(3, &reports, OutputFormat::Text).is_ok());
        for format in [OutputFormat::Json, OutputFormat::Table] {
            match execute(3, &reports, format) {
                Err(CliError::NothingToReport(message)) => assert_eq!(message, NOTHING_CLEANED),
                other => panic!("Expected nothing to report, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_invalid_count_wins_over_empty_data() {
        let reports = ReportManager::new(CleaningManager::new(vec![], vec![]));
        assert!(matches!(
            execute(0, &reports, OutputFormat::Json),
            Err(CliError::InvalidInput(message)) if message == INVALID_ROOM_COUNT
        ));
    }

    #[test]
    fn test_rooms_without_cleanings_are_ranked() {
        let reports = ReportManager::new(CleaningManager::new(
            vec![Room::new("Office", 5, 5).unwrap()],
            vec![],
        ));
        assert!(execute(1, &reports, OutputFormat::Json).is_ok());
        assert!(execute(1, &reports, OutputFormat::Table).is_ok());
    }
}

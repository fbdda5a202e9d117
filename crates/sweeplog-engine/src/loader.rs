//! Load room and cleaning-log records from comma-separated files
//!
//! Both files start with a header line. Room lines are
//! `RoomID,Length,Width`; log lines are `RoomID,MM/DD/YYYY HH:MM:SS,Percent`.
//! Fields are split from the right, so a room id may itself contain commas.

use crate::error::{EngineError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use sweeplog_domain::{parse_timestamp, CleaningEvent, RecordSource, Room};
use tracing::{debug, info, warn};

/// Record source backed by a room file and a cleaning-log file
#[derive(Debug, Clone)]
pub struct FileSource {
    rooms_path: PathBuf,
    log_path: PathBuf,
}

impl FileSource {
    /// Create a source for the given pair of files
    ///
    /// Nothing is read until one of the `load_*` methods is called.
    pub fn new(rooms_path: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            rooms_path: rooms_path.into(),
            log_path: log_path.into(),
        }
    }
}

impl RecordSource for FileSource {
    type Error = EngineError;

    fn load_rooms(&self) -> Result<Vec<Room>> {
        let contents = read_file(&self.rooms_path)?;
        let rooms = parse_room_file(&contents, &self.rooms_path.display().to_string());
        info!("Loaded {} rooms from {}", rooms.len(), self.rooms_path.display());
        Ok(rooms)
    }

    fn load_events(&self) -> Result<Vec<CleaningEvent>> {
        let contents = read_file(&self.log_path)?;
        let events = parse_log_file(&contents, &self.log_path.display().to_string());
        info!(
            "Loaded {} cleaning events from {}",
            events.len(),
            self.log_path.display()
        );
        Ok(events)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| EngineError::from_io(path, e))
}

/// Parse the contents of a room file
///
/// Malformed lines are logged and skipped. `origin` names the file in log
/// messages.
pub fn parse_room_file(contents: &str, origin: &str) -> Vec<Room> {
    parse_records(contents, origin, parse_room_line)
}

/// Parse the contents of a cleaning-log file
///
/// Malformed lines are logged and skipped. Events keep file order.
pub fn parse_log_file(contents: &str, origin: &str) -> Vec<CleaningEvent> {
    parse_records(contents, origin, parse_event_line)
}

fn parse_records<T>(
    contents: &str,
    origin: &str,
    parse_line: fn(&str) -> std::result::Result<T, String>,
) -> Vec<T> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut records = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(record) => records.push(record),
            // The first line is a header unless it happens to parse as a record
            Err(_) if idx == 0 => debug!("Skipping header line in {}", origin),
            Err(e) => warn!("{}:{}: skipping malformed line: {}", origin, idx + 1, e),
        }
    }

    records
}

/// Split `line` into exactly three fields, splitting from the right
fn split_fields(line: &str) -> std::result::Result<(&str, &str, &str), String> {
    let mut fields = line.rsplitn(3, ',');
    let third = fields.next();
    let second = fields.next();
    let first = fields.next();

    match (first, second, third) {
        (Some(first), Some(second), Some(third)) => Ok((first.trim(), second.trim(), third.trim())),
        _ => Err(format!("expected 3 comma-separated fields in '{}'", line)),
    }
}

fn parse_room_line(line: &str) -> std::result::Result<Room, String> {
    let (id, length, width) = split_fields(line)?;
    let length: u32 = length
        .parse()
        .map_err(|e| format!("invalid length '{}': {}", length, e))?;
    let width: u32 = width
        .parse()
        .map_err(|e| format!("invalid width '{}': {}", width, e))?;
    Room::new(id, length, width)
}

fn parse_event_line(line: &str) -> std::result::Result<CleaningEvent, String> {
    let (room_id, timestamp, percent) = split_fields(line)?;
    if room_id.is_empty() {
        return Err("missing room id".to_string());
    }
    let timestamp = parse_timestamp(timestamp)?;
    let percent_text = percent.trim_end_matches('%').trim();
    let percent: f64 = percent_text
        .parse()
        .map_err(|e| format!("invalid percent completed '{}': {}", percent, e))?;
    CleaningEvent::new(room_id, timestamp, percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use sweeplog_domain::format_timestamp;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_room_file() {
        let contents = "RoomID,Length,Width\nKitchen,10,12\nDining Room,14,12\n";
        let rooms = parse_room_file(contents, "rooms.csv");
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].id, "Kitchen");
        assert_eq!(rooms[0].area(), 120);
        assert_eq!(rooms[1].id, "Dining Room");
    }

    #[test]
    fn test_parse_room_file_without_header() {
        let rooms = parse_room_file("Kitchen,10,12\nOffice,5,5", "rooms.csv");
        assert_eq!(rooms.len(), 2);
    }

    #[test]
    fn test_parse_room_id_with_comma() {
        let rooms = parse_room_file("RoomID,Length,Width\nBath, upstairs,6,8\n", "rooms.csv");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "Bath, upstairs");
    }

    #[test]
    fn test_parse_room_file_skips_malformed() {
        let contents = "RoomID,Length,Width\nKitchen,10\nFoyer,abc,5\nAttic,0,5\nOffice,5,5\n";
        let rooms = parse_room_file(contents, "rooms.csv");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "Office");
    }

    #[test]
    fn test_parse_log_file_keeps_order() {
        let contents = "RoomID,Date,Percent\n\
                        Office,06/01/2021 13:39:01,100\n\
                        Foyer,05/01/2021 10:03:11,45.5\n\
                        Office,05/02/2021 08:00:00,80%\n";
        let events = parse_log_file(contents, "log.csv");
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].room_id, "Office");
        assert_eq!(format_timestamp(&events[0].timestamp), "06/01/2021 13:39:01");
        assert_eq!(events[1].percent_completed, 45.5);
        assert_eq!(events[2].percent_completed, 80.0);
    }

    #[test]
    fn test_parse_log_file_skips_malformed() {
        let contents = "RoomID,Date,Percent\n\
                        Office,2021-06-01 13:39:01,100\n\
                        Office,06/01/2021 13:39:01,150\n\
                        ,06/01/2021 13:39:01,10\n\
                        \n\
                        Foyer,05/01/2021 10:03:11,45\n";
        let events = parse_log_file(contents, "log.csv");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].room_id, "Foyer");
    }

    #[test]
    fn test_file_source_reads_files() {
        let mut rooms = NamedTempFile::new().unwrap();
        writeln!(rooms, "RoomID,Length,Width\nOffice,5,5").unwrap();
        let mut log = NamedTempFile::new().unwrap();
        writeln!(log, "RoomID,Date,Percent\nOffice,06/01/2021 13:39:01,100").unwrap();

        let source = FileSource::new(rooms.path(), log.path());
        assert_eq!(source.load_rooms().unwrap().len(), 1);
        assert_eq!(source.load_events().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("rooms.csv"), dir.path().join("log.csv"));

        let err = source.load_rooms().unwrap_err();
        assert!(err.is_not_found());
        let err = source.load_events().unwrap_err();
        assert!(err.is_not_found());
    }
}

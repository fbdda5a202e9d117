//! Canonical text reports
//!
//! Every report uses the same envelope: a header line ending in `[`, body
//! lines indented by three spaces, and a closing `]`. Malformed input is
//! answered with a fixed diagnostic string, never an error.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::manager::CleaningManager;
use crate::ranking::rank_by_frequency;
use chrono::NaiveDateTime;
use std::path::Path;
use sweeplog_domain::{format_timestamp, parse_timestamp};
use tracing::debug;

/// Returned by the vacuum bag report when the timestamp cannot be parsed
pub const INVALID_TIMESTAMP: &str = "Date & time must be in the format: MM/DD/YYYY HH:MM:SS";

/// Returned by the frequency report when the room count is not positive
pub const INVALID_ROOM_COUNT: &str = "Number of rooms must be greater than 0.";

/// Returned when there is nothing to report
pub const NOTHING_CLEANED: &str = "No rooms have been cleaned.";

const INDENT: &str = "   ";

/// Vacuum bag fill level since it was last replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagStatus {
    /// Square feet cleaned since the bag was replaced
    pub coverage_sq_ft: u64,
    /// Square feet the bag can take
    pub capacity_sq_ft: u64,
}

impl BagStatus {
    /// Whether the bag has reached capacity
    pub fn is_overdue(&self) -> bool {
        self.coverage_sq_ft >= self.capacity_sq_ft
    }

    /// Square feet left before the bag is due, zero once overdue
    pub fn remaining_sq_ft(&self) -> u64 {
        self.capacity_sq_ft.saturating_sub(self.coverage_sq_ft)
    }
}

/// Builds the vacuum bag, frequency and room reports
///
/// # Examples
///
/// ```
/// use sweeplog_domain::Room;
/// use sweeplog_engine::{CleaningManager, ReportManager};
///
/// let manager = CleaningManager::new(vec![Room::new("Office", 5, 5).unwrap()], vec![]);
/// let reports = ReportManager::new(manager);
///
/// assert_eq!(reports.room_report(), "No rooms have been cleaned.");
/// assert_eq!(reports.frequency_report(0), "Number of rooms must be greater than 0.");
/// assert_eq!(
///     reports.frequency_report(3),
///     "Frequency of Cleanings [\n   Office has been cleaned 0 times\n]\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ReportManager {
    manager: CleaningManager,
    config: ReportConfig,
}

impl ReportManager {
    /// Create a report manager with the default configuration
    pub fn new(manager: CleaningManager) -> Self {
        Self::with_config(manager, ReportConfig::default())
    }

    /// Create a report manager with a custom configuration
    pub fn with_config(manager: CleaningManager, config: ReportConfig) -> Self {
        Self { manager, config }
    }

    /// Load records from a room file and a cleaning-log file
    pub fn from_files(rooms_path: impl AsRef<Path>, log_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(CleaningManager::from_files(rooms_path, log_path)?))
    }

    /// The underlying cleaning history
    pub fn manager(&self) -> &CleaningManager {
        &self.manager
    }

    /// Report configuration in effect
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Bag fill level for a bag replaced at `last_replaced`
    pub fn bag_status(&self, last_replaced: NaiveDateTime) -> BagStatus {
        BagStatus {
            coverage_sq_ft: self.manager.coverage_since(last_replaced),
            capacity_sq_ft: self.config.bag_capacity_sq_ft,
        }
    }

    /// How many square feet remain before the vacuum bag should be replaced
    ///
    /// `timestamp` is when the bag was last replaced, as
    /// `MM/DD/YYYY HH:MM:SS`. It is echoed verbatim in the header.
    pub fn vacuum_bag_report(&self, timestamp: &str) -> String {
        let Ok(last_replaced) = parse_timestamp(timestamp) else {
            debug!("Rejected vacuum bag timestamp '{}'", timestamp);
            return INVALID_TIMESTAMP.to_string();
        };

        let status = self.bag_status(last_replaced);
        let body = if status.is_overdue() {
            "Bag is overdue for replacement!".to_string()
        } else {
            format!(
                "Bag is due for replacement in {} SQ FT",
                status.remaining_sq_ft()
            )
        };

        format!(
            "Vacuum Bag Report (last replaced {}) [\n{}{}\n]",
            timestamp, INDENT, body
        )
    }

    /// The `number` most frequently cleaned rooms
    ///
    /// Lists every room when `number` exceeds the room count.
    pub fn frequency_report(&self, number: i64) -> String {
        if number <= 0 {
            return INVALID_ROOM_COUNT.to_string();
        }

        let index = self.manager.events_by_room();
        if index.is_empty() {
            return NOTHING_CLEANED.to_string();
        }

        let limit = usize::try_from(number).unwrap_or(usize::MAX);
        let mut lines = vec!["Frequency of Cleanings [".to_string()];
        for entry in rank_by_frequency(&index).into_iter().take(limit) {
            lines.push(format!(
                "{}{} has been cleaned {} times",
                INDENT, entry.room_id, entry.count
            ));
        }
        lines.push("]".to_string());

        debug!("Frequency report for top {} of {} rooms", number, index.len());
        lines.join("\n") + "\n"
    }

    /// Every room's cleanings, rooms ascending, cleanings newest first
    pub fn room_report(&self) -> String {
        let index = self.manager.events_by_room();
        if !index.has_events() {
            return NOTHING_CLEANED.to_string();
        }

        let mut lines = vec!["Room Report [".to_string()];
        for (room_id, events) in index.iter() {
            lines.push(format!("{}{} was cleaned on [", INDENT, room_id));
            if events.is_empty() {
                lines.push(format!("{0}{0}(never cleaned)", INDENT));
            }
            for event in events {
                lines.push(format!(
                    "{0}{0}{1}",
                    INDENT,
                    format_timestamp(&event.timestamp)
                ));
            }
            lines.push(format!("{}]", INDENT));
        }
        lines.push("]".to_string());

        debug!("Room report for {} rooms", index.len());
        lines.join("\n") + "\n"
    }
}

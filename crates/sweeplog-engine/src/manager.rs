//! Cleaning history over a frozen snapshot of rooms and events

use crate::coverage;
use crate::error::Result;
use crate::history::HistoryIndex;
use crate::loader::FileSource;
use crate::ranking::{rank_by_frequency, RoomFrequency};
use chrono::NaiveDateTime;
use std::path::Path;
use sweeplog_domain::{CleaningEvent, RecordSource, Room};
use tracing::info;

/// Cleaning history for a set of rooms
///
/// Holds the room and event collections exactly as loaded and answers
/// queries over them. Derived structures are rebuilt per query.
///
/// # Examples
///
/// ```no_run
/// use sweeplog_engine::CleaningManager;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let manager = CleaningManager::from_files("input/rooms.csv", "input/log.csv")?;
/// for (room_id, events) in manager.events_by_room().iter() {
///     println!("{}: {} cleanings", room_id, events.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CleaningManager {
    rooms: Vec<Room>,
    events: Vec<CleaningEvent>,
}

impl CleaningManager {
    /// Create a manager over already-loaded records
    ///
    /// Event order is significant: coverage visits events in this order.
    pub fn new(rooms: Vec<Room>, events: Vec<CleaningEvent>) -> Self {
        Self { rooms, events }
    }

    /// Load both collections from a record source
    pub fn from_source<S>(source: &S) -> std::result::Result<Self, S::Error>
    where
        S: RecordSource,
    {
        let rooms = source.load_rooms()?;
        let events = source.load_events()?;
        Ok(Self::new(rooms, events))
    }

    /// Load both collections from a room file and a cleaning-log file
    ///
    /// Fails with [`crate::EngineError::NotFound`] if either file is missing.
    pub fn from_files(rooms_path: impl AsRef<Path>, log_path: impl AsRef<Path>) -> Result<Self> {
        let source = FileSource::new(rooms_path.as_ref(), log_path.as_ref());
        let manager = Self::from_source::<FileSource>(&source)?;
        info!(
            "Cleaning history ready: {} rooms, {} events",
            manager.rooms.len(),
            manager.events.len()
        );
        Ok(manager)
    }

    /// All rooms, in load order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All cleaning events, in load order
    pub fn events(&self) -> &[CleaningEvent] {
        &self.events
    }

    /// Number of rooms loaded
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Events grouped by room, rooms ascending, events newest first
    pub fn events_by_room(&self) -> HistoryIndex<'_> {
        HistoryIndex::build(&self.rooms, &self.events)
    }

    /// Square footage cleaned strictly after `cutoff`
    pub fn coverage_since(&self, cutoff: NaiveDateTime) -> u64 {
        coverage::coverage_since(&self.rooms, &self.events, cutoff)
    }

    /// Every room ranked by cleaning count
    pub fn frequency_ranking(&self) -> Vec<RoomFrequency<'_>> {
        rank_by_frequency(&self.events_by_room())
    }

    /// The `n` most frequently cleaned rooms, or all rooms if there are fewer
    pub fn top_rooms(&self, n: usize) -> Vec<RoomFrequency<'_>> {
        let mut ranking = self.frequency_ranking();
        ranking.truncate(n);
        ranking
    }
}

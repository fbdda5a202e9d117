//! History index: cleaning events grouped by room
//!
//! Keys iterate in ascending room-id order. Each room's events are ordered by
//! timestamp, most recent first. Events sharing a timestamp keep their
//! original input order. Every known room has an entry, possibly empty.

use std::collections::BTreeMap;
use sweeplog_domain::{CleaningEvent, Room};
use tracing::warn;

/// Room-keyed, time-ordered view over a set of cleaning events
///
/// Borrows from the records it was built from; building one is cheap and the
/// engine rebuilds it for every query.
#[derive(Debug, Clone, Default)]
pub struct HistoryIndex<'a> {
    entries: BTreeMap<&'a str, Vec<&'a CleaningEvent>>,
}

impl<'a> HistoryIndex<'a> {
    /// Group `events` under `rooms`
    ///
    /// Events whose room id matches no room are dropped.
    pub fn build(rooms: &'a [Room], events: &'a [CleaningEvent]) -> Self {
        let mut entries: BTreeMap<&'a str, Vec<&'a CleaningEvent>> = rooms
            .iter()
            .map(|room| (room.id.as_str(), Vec::new()))
            .collect();

        let mut orphans = 0usize;
        for event in events {
            match entries.get_mut(event.room_id.as_str()) {
                Some(bucket) => bucket.push(event),
                None => orphans += 1,
            }
        }
        if orphans > 0 {
            warn!("Dropped {} events referencing unknown rooms", orphans);
        }

        // Stable sort: equal timestamps stay in input order
        for bucket in entries.values_mut() {
            bucket.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }

        Self { entries }
    }

    /// Events for one room, most recent first
    pub fn get(&self, room_id: &str) -> Option<&[&'a CleaningEvent]> {
        self.entries.get(room_id).map(Vec::as_slice)
    }

    /// Iterate rooms in ascending id order with their events
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a CleaningEvent])> + '_ {
        self.entries
            .iter()
            .map(|(room_id, events)| (*room_id, events.as_slice()))
    }

    /// Room ids in ascending order
    pub fn room_ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of rooms in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no rooms at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether at least one room has at least one event
    pub fn has_events(&self) -> bool {
        self.entries.values().any(|events| !events.is_empty())
    }

    /// Number of indexed (non-orphan) events
    pub fn total_events(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

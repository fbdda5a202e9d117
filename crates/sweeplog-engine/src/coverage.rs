//! Square footage cleaned since a cutoff
//!
//! The running total is truncated toward zero after every qualifying event,
//! not once at the end, so fractional remainders are discarded at each step.
//! Events are visited in the order they were loaded.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use sweeplog_domain::{CleaningEvent, Room};
use tracing::debug;

/// Rooms keyed by id; the last room wins when ids repeat
pub(crate) fn rooms_by_id(rooms: &[Room]) -> HashMap<&str, &Room> {
    rooms.iter().map(|room| (room.id.as_str(), room)).collect()
}

/// Total square footage cleaned by events strictly after `cutoff`
///
/// Events naming an unknown room contribute nothing.
///
/// # Examples
///
/// ```
/// use sweeplog_domain::{parse_timestamp, CleaningEvent, Room};
/// use sweeplog_engine::coverage_since;
///
/// let rooms = vec![Room::new("Hall", 3, 3).unwrap()];
/// let events = vec![
///     CleaningEvent::new("Hall", parse_timestamp("05/01/2021 10:00:00").unwrap(), 50.0).unwrap(),
///     CleaningEvent::new("Hall", parse_timestamp("05/02/2021 10:00:00").unwrap(), 50.0).unwrap(),
/// ];
///
/// // 4.5 truncates to 4, then 4 + 4.5 = 8.5 truncates to 8
/// let cutoff = parse_timestamp("04/30/2021 00:00:00").unwrap();
/// assert_eq!(coverage_since(&rooms, &events, cutoff), 8);
/// ```
pub fn coverage_since(rooms: &[Room], events: &[CleaningEvent], cutoff: NaiveDateTime) -> u64 {
    let rooms = rooms_by_id(rooms);
    let mut total: u64 = 0;
    let mut counted = 0usize;

    for event in events.iter().filter(|e| e.timestamp > cutoff) {
        let Some(room) = rooms.get(event.room_id.as_str()) else {
            debug!("No room '{}' for coverage, skipping event", event.room_id);
            continue;
        };

        let contribution = room.area() as f64 * event.fraction_completed();
        total = (total as f64 + contribution).trunc() as u64;
        counted += 1;
    }

    debug!("Coverage since {}: {} sq ft from {} events", cutoff, total, counted);
    total
}

//! Cleaning event module - one cleaning pass over one room

use chrono::NaiveDateTime;

/// A timestamped record of a cleaning pass
///
/// `room_id` is a foreign key into the room set. It is not checked here: an
/// event may name a room that does not exist, and the engine treats such
/// events as orphans.
#[derive(Debug, Clone, PartialEq)]
pub struct CleaningEvent {
    /// Id of the room that was cleaned
    pub room_id: String,

    /// When the cleaning happened (no timezone)
    pub timestamp: NaiveDateTime,

    /// Share of the floor cleaned, in percent [0, 100]; may be fractional
    pub percent_completed: f64,
}

impl CleaningEvent {
    /// Create a new cleaning event
    ///
    /// Fails if `percent_completed` is not a finite value in `0.0..=100.0`.
    pub fn new(
        room_id: impl Into<String>,
        timestamp: NaiveDateTime,
        percent_completed: f64,
    ) -> Result<Self, String> {
        if !percent_completed.is_finite() || !(0.0..=100.0).contains(&percent_completed) {
            return Err(format!(
                "Percent completed must be between 0 and 100 (got {})",
                percent_completed
            ));
        }

        Ok(Self {
            room_id: room_id.into(),
            timestamp,
            percent_completed,
        })
    }

    /// Percent completed as a fraction in [0, 1]
    pub fn fraction_completed(&self) -> f64 {
        self.percent_completed / 100.0
    }
}

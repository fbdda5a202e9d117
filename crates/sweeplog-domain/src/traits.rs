//! Trait definitions for external interactions
//!
//! Record parsing lives outside the domain layer. These traits describe what
//! the engine needs from it.

use crate::{CleaningEvent, Room};

/// Trait for loading the two record collections
///
/// Implemented by the engine's file loader and by in-memory fixtures in tests.
/// Both collections must be returned in source order.
pub trait RecordSource {
    /// Error type for load operations
    type Error;

    /// Load every room record
    fn load_rooms(&self) -> Result<Vec<Room>, Self::Error>;

    /// Load every cleaning event record
    fn load_events(&self) -> Result<Vec<CleaningEvent>, Self::Error>;
}

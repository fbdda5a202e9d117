//! Sweeplog Domain Layer
//!
//! This crate contains the record model shared by every other Sweeplog crate.
//! It carries no infrastructure: no file access, no logging, no configuration.
//! Everything here is an immutable value type or a trait describing how
//! records arrive from the outside world.
//!
//! ## Key Concepts
//!
//! - **Room**: a physical space with fixed floor dimensions and a unique id
//! - **Cleaning Event**: a timestamped cleaning pass over one room, with the
//!   percentage of the floor that was completed
//! - **Timestamp**: a timezone-free date-time exchanged in the fixed
//!   `MM/DD/YYYY HH:MM:SS` text form
//!
//! ## Architecture
//!
//! - Pure value types, validated on construction
//! - Trait definitions for record sources; implementations live in
//!   `sweeplog-engine`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod event;
pub mod room;
pub mod timestamp;
pub mod traits;

// Re-exports for convenience
pub use event::CleaningEvent;
pub use room::Room;
pub use timestamp::{format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
pub use traits::RecordSource;

/// Re-exported so downstream crates agree on the timestamp type.
pub use chrono::NaiveDateTime;

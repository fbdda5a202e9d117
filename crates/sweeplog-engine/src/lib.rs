//! Sweeplog Engine
//!
//! Aggregation and reporting over a frozen snapshot of rooms and cleaning
//! events.
//!
//! # Overview
//!
//! The engine answers three kinds of historical question:
//! - **Coverage**: how many square feet have been cleaned since a point in time
//! - **Timelines**: which cleanings happened in each room, newest first
//! - **Frequency**: which rooms are cleaned most often
//!
//! # Architecture
//!
//! ```text
//! room file ─┐
//!            ├→ loader → CleaningManager ─┬→ HistoryIndex ─┬→ ranking ─┐
//! log file ──┘                            │                └──────────┼→ ReportManager → text
//!                                         └→ coverage ─────────────────┘
//! ```
//!
//! All derived structures are rebuilt on every query. Nothing is cached and
//! nothing is mutated after construction.
//!
//! # Example Usage
//!
//! ```
//! use sweeplog_domain::{parse_timestamp, CleaningEvent, Room};
//! use sweeplog_engine::{CleaningManager, ReportManager};
//!
//! let rooms = vec![
//!     Room::new("Kitchen", 10, 10).unwrap(),
//!     Room::new("Office", 5, 5).unwrap(),
//! ];
//! let events = vec![
//!     CleaningEvent::new("Office", parse_timestamp("01/02/2021 10:00:00").unwrap(), 100.0).unwrap(),
//!     CleaningEvent::new("Kitchen", parse_timestamp("01/01/2021 08:00:00").unwrap(), 50.0).unwrap(),
//! ];
//!
//! let manager = CleaningManager::new(rooms, events);
//! let cutoff = parse_timestamp("12/31/2020 00:00:00").unwrap();
//! assert_eq!(manager.coverage_since(cutoff), 75);
//!
//! let reports = ReportManager::new(manager);
//! assert_eq!(
//!     reports.vacuum_bag_report("12/31/2020 00:00:00"),
//!     "Vacuum Bag Report (last replaced 12/31/2020 00:00:00) [\n   Bag is due for replacement in 5205 SQ FT\n]"
//! );
//! ```
//!
//! # Configuration
//!
//! Report settings can be read from TOML:
//!
//! ```toml
//! [report]
//! bag_capacity_sq_ft = 5280
//! ```

#![warn(missing_docs)]

mod config;
mod coverage;
mod error;
mod history;
mod loader;
mod manager;
mod ranking;
mod report;

pub use config::ReportConfig;
pub use coverage::coverage_since;
pub use error::{EngineError, Result};
pub use history::HistoryIndex;
pub use loader::{parse_log_file, parse_room_file, FileSource};
pub use manager::CleaningManager;
pub use ranking::{rank_by_frequency, RoomFrequency};
pub use report::{
    BagStatus, ReportManager, INVALID_ROOM_COUNT, INVALID_TIMESTAMP, NOTHING_CLEANED,
};

//! Static JSON schedule files.
//!
//! A schedule file lists stops, each with departures per direction label
//! and optional access times. Files are read-only input; a board is built
//! from a freshly loaded document on every request.

mod error;
mod loader;
mod types;

pub use error::ScheduleError;
pub use loader::{ScheduleConfig, ScheduleLoader, ScheduleLocation, parse_document};
pub use types::{Access, DEFAULT_BIKE_MINS, DEFAULT_WALK_MINS, Departure, ScheduleDocument, Stop};

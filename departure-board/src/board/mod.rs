//! Departure board construction.
//!
//! Given a loaded schedule, a station, a direction and the current time,
//! this module selects the next departures and marks each one with how
//! reachable it is on foot and by bike. Everything here is synchronous and
//! pure; loading and presentation live in [`crate::schedule`] and
//! [`crate::web`].

mod config;
mod judge;
mod selector;

pub use config::BoardConfig;
pub use judge::{
    BIKE_BUFFER_MINS, FeasibilityMark, TravelMode, WALK_BUFFER_MINS, judge_arrival, judge_mode,
};
pub use selector::{
    Board, BoardError, BoardStatus, UpcomingDeparture, resolve_direction, select_departures,
};

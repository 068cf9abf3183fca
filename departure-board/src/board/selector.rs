//! Next-departure selection.
//!
//! Picks the next few departures from a stop in one direction and judges
//! whether each can be reached on foot or by bike.

use serde::Serialize;
use tracing::debug;

use crate::domain::{ClockTime, Direction, InvalidDirection};
use crate::schedule::{Access, Departure, ScheduleDocument};

use super::config::BoardConfig;
use super::judge::{FeasibilityMark, TravelMode, judge_mode};

/// Errors that stop a board from being built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Direction key is not recognized
    #[error(transparent)]
    InvalidDirection(#[from] InvalidDirection),

    /// Direction is valid but has no configured label
    #[error("no label configured for direction {0}")]
    UnlabelledDirection(Direction),

    /// No stop has the requested name
    #[error("station not found: {station:?}")]
    StationNotFound {
        station: String,
        /// Label of the (valid) requested direction
        label: String,
    },
}

/// A departure that is still to come, with reachability marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingDeparture {
    pub departure: Departure,
    /// Minutes from now until departure; always positive.
    pub minutes_left: i32,
    pub walk: FeasibilityMark,
    pub bike: FeasibilityMark,
}

/// What the board shows for a valid station and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardStatus {
    /// Upcoming departures, earliest first, never empty.
    Upcoming(Vec<UpcomingDeparture>),
    /// No departures left today.
    ServiceEnded,
}

/// A built departure board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub station: String,
    pub direction: Direction,
    pub label: String,
    pub now: ClockTime,
    pub access: Access,
    pub status: BoardStatus,
}

impl Board {
    /// The upcoming departures, empty if service has ended.
    pub fn departures(&self) -> &[UpcomingDeparture] {
        match &self.status {
            BoardStatus::Upcoming(deps) => deps,
            BoardStatus::ServiceEnded => &[],
        }
    }

    /// Whether no departures remain today.
    pub fn is_service_ended(&self) -> bool {
        matches!(self.status, BoardStatus::ServiceEnded)
    }
}

/// Resolve a direction key to its direction and display label.
pub fn resolve_direction<'c>(
    config: &'c BoardConfig,
    key: &str,
) -> Result<(Direction, &'c str), BoardError> {
    let direction = Direction::parse(key)?;
    let label = config
        .label(direction)
        .ok_or(BoardError::UnlabelledDirection(direction))?;
    Ok((direction, label))
}

/// Build the board for `station` in direction `direction_key` at time `now`.
///
/// Only departures strictly after `now` are kept. They are sorted by time
/// (stable, so equal times keep file order) and cut to
/// `config.max_departures`.
pub fn select_departures(
    doc: &ScheduleDocument,
    station: &str,
    direction_key: &str,
    now: ClockTime,
    config: &BoardConfig,
) -> Result<Board, BoardError> {
    let (direction, label) = resolve_direction(config, direction_key)?;

    let stop = doc.stop(station).ok_or_else(|| BoardError::StationNotFound {
        station: station.to_string(),
        label: label.to_string(),
    })?;

    let access = stop.access;
    let mut upcoming: Vec<&Departure> = stop
        .departures_for(label)
        .iter()
        .filter(|d| d.time > now)
        .collect();
    upcoming.sort_by_key(|d| d.time);
    upcoming.truncate(config.max_departures);

    debug!(
        station,
        label,
        %now,
        count = upcoming.len(),
        "selected upcoming departures"
    );

    let status = if upcoming.is_empty() {
        BoardStatus::ServiceEnded
    } else {
        BoardStatus::Upcoming(
            upcoming
                .into_iter()
                .map(|d| judge_departure(d, now, access))
                .collect(),
        )
    };

    Ok(Board {
        station: station.to_string(),
        direction,
        label: label.to_string(),
        now,
        access,
        status,
    })
}

fn judge_departure(departure: &Departure, now: ClockTime, access: Access) -> UpcomingDeparture {
    let minutes_left = departure.time.minutes_since(now);
    UpcomingDeparture {
        departure: departure.clone(),
        minutes_left,
        walk: judge_mode(minutes_left, TravelMode::Walk, access.walk),
        bike: judge_mode(minutes_left, TravelMode::Bike, access.bike),
    }
}

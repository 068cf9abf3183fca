//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::{Board, FeasibilityMark, UpcomingDeparture};

use super::links::train_details_url;
use super::templates::{board_title, service_ended_message};

/// Query parameters for the board.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Station name, matched exactly
    pub station: Option<String>,

    /// Direction key: `up`, `down` or `extra`
    pub direction: Option<String>,

    /// Day type: `weekday` or `holiday`
    pub day: Option<String>,

    /// Time in HH:MM format (defaults to now)
    pub time: Option<String>,
}

/// A departure in board results.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Departure time, HH:MM
    pub time: String,

    /// Train category
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Destination name
    pub destination: String,

    /// Train identifier (may be empty)
    pub train_id: String,

    /// Minutes until departure
    pub minutes_left: i32,

    /// Reachability on foot
    pub walk: MarkResult,

    /// Reachability by bike
    pub bike: MarkResult,

    /// Train details link
    pub link: String,
}

impl DepartureResult {
    /// Create from an upcoming departure.
    pub fn from_upcoming(upcoming: &UpcomingDeparture) -> Self {
        let dep = &upcoming.departure;
        Self {
            time: dep.time.to_string(),
            kind: dep.kind.clone(),
            destination: dep.destination.clone(),
            train_id: dep.train_id.clone(),
            minutes_left: upcoming.minutes_left,
            walk: MarkResult::from(upcoming.walk),
            bike: MarkResult::from(upcoming.bike),
            link: train_details_url(&dep.train_id),
        }
    }
}

/// A feasibility mark with its displayed symbol.
#[derive(Debug, Serialize)]
pub struct MarkResult {
    pub mark: FeasibilityMark,
    pub symbol: &'static str,
}

impl From<FeasibilityMark> for MarkResult {
    fn from(mark: FeasibilityMark) -> Self {
        Self {
            mark,
            symbol: mark.symbol(),
        }
    }
}

/// Response for a board request.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub station: String,

    /// Direction key
    pub direction: String,

    /// Direction display label
    pub label: String,

    pub title: String,

    /// Time the board was computed for
    pub now: String,

    /// Walking and cycling minutes used for the marks
    pub walk_mins: u32,
    pub bike_mins: u32,

    /// Upcoming departures, earliest first
    pub departures: Vec<DepartureResult>,

    /// Fallback message when no departures remain
    pub message: Option<String>,
}

impl BoardResponse {
    /// Create from a built board.
    pub fn from_board(board: &Board) -> Self {
        let message = board
            .is_service_ended()
            .then(|| service_ended_message(&board.label));

        Self {
            station: board.station.clone(),
            direction: board.direction.key().to_string(),
            label: board.label.clone(),
            title: board_title(&board.station, &board.label),
            now: board.now.to_string(),
            walk_mins: board.access.walk,
            bike_mins: board.access.bike,
            departures: board
                .departures()
                .iter()
                .map(DepartureResult::from_upcoming)
                .collect(),
            message,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

//! Arrival feasibility for walking and cycling to the station.

use std::fmt;

use serde::Serialize;

/// Extra minutes on top of the walk time for a comfortable arrival.
pub const WALK_BUFFER_MINS: i32 = 5;

/// Extra minutes on top of the bike time for a comfortable arrival.
pub const BIKE_BUFFER_MINS: i32 = 3;

/// How reachable a departure is by a given travel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityMark {
    /// Arrives with the full buffer to spare.
    Comfortable,
    /// Arrives in time, but inside the buffer.
    Tight,
    /// Cannot make it.
    Infeasible,
}

impl FeasibilityMark {
    /// The symbol shown on the board.
    pub fn symbol(&self) -> &'static str {
        match self {
            FeasibilityMark::Comfortable => "〇",
            FeasibilityMark::Tight => "△",
            FeasibilityMark::Infeasible => "×",
        }
    }
}

impl fmt::Display for FeasibilityMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A way of getting to the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Walk,
    Bike,
}

impl TravelMode {
    /// Fixed safety buffer for this mode, in minutes.
    pub fn buffer_mins(&self) -> i32 {
        match self {
            TravelMode::Walk => WALK_BUFFER_MINS,
            TravelMode::Bike => BIKE_BUFFER_MINS,
        }
    }
}

/// Judge whether a departure `minutes_left` away can be reached with
/// `travel_mins` of travel and `buffer_mins` of slack.
///
/// Total over all integers: negative `minutes_left` is always infeasible.
///
/// # Examples
///
/// ```
/// use departure_board::board::{judge_arrival, FeasibilityMark};
///
/// assert_eq!(judge_arrival(15, 10, 5), FeasibilityMark::Comfortable);
/// assert_eq!(judge_arrival(12, 10, 5), FeasibilityMark::Tight);
/// assert_eq!(judge_arrival(5, 10, 5), FeasibilityMark::Infeasible);
/// ```
pub fn judge_arrival(minutes_left: i32, travel_mins: i32, buffer_mins: i32) -> FeasibilityMark {
    if minutes_left >= travel_mins.saturating_add(buffer_mins) {
        FeasibilityMark::Comfortable
    } else if minutes_left >= travel_mins {
        FeasibilityMark::Tight
    } else {
        FeasibilityMark::Infeasible
    }
}

/// Judge a departure for a travel mode, using that mode's fixed buffer.
pub fn judge_mode(minutes_left: i32, mode: TravelMode, travel_mins: u32) -> FeasibilityMark {
    let travel = i32::try_from(travel_mins).unwrap_or(i32::MAX);
    judge_arrival(minutes_left, travel, mode.buffer_mins())
}

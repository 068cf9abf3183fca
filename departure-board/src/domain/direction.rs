//! Travel direction keys.

use std::fmt;
use std::str::FromStr;

/// Error returned when a direction key is not one of `up`, `down`, `extra`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {key:?}")]
pub struct InvalidDirection {
    key: String,
}

impl InvalidDirection {
    /// The rejected key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// One of the three travel directions a board can show.
///
/// The key is what appears in the query string. The human-facing label is
/// looked up through [`crate::board::BoardConfig`], because schedule files
/// index departures by label rather than by key.
///
/// # Examples
///
/// ```
/// use departure_board::domain::Direction;
///
/// assert_eq!(Direction::parse("up").unwrap(), Direction::Up);
/// assert!(Direction::parse("side").is_err());
/// assert!(Direction::parse("Up").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Extra,
}

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Direction; 3] = [Direction::Up, Direction::Down, Direction::Extra];

    /// Parse a direction key. Matching is exact and case-sensitive.
    pub fn parse(key: &str) -> Result<Self, InvalidDirection> {
        match key {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "extra" => Ok(Direction::Extra),
            other => Err(InvalidDirection {
                key: other.to_string(),
            }),
        }
    }

    /// The query-string key for this direction.
    pub fn key(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Extra => "extra",
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

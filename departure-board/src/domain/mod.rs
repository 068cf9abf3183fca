//! Domain types for the departure board.
//!
//! These are validated value types parsed from query strings and schedule
//! files. Code that receives them can trust their validity.

mod day_type;
mod direction;
mod time;

pub use day_type::{DayType, InvalidDayType};
pub use direction::{Direction, InvalidDirection};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};

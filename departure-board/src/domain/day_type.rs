//! Service day types.

use std::fmt;
use std::str::FromStr;

/// Error returned when a day type is neither `weekday` nor `holiday`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day type: {key:?}")]
pub struct InvalidDayType {
    key: String,
}

/// Which timetable a board is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayType {
    #[default]
    Weekday,
    Holiday,
}

impl DayType {
    /// Parse a day type key.
    pub fn parse(key: &str) -> Result<Self, InvalidDayType> {
        match key {
            "weekday" => Ok(DayType::Weekday),
            "holiday" => Ok(DayType::Holiday),
            other => Err(InvalidDayType {
                key: other.to_string(),
            }),
        }
    }

    /// The query-string key for this day type.
    pub fn key(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Holiday => "holiday",
        }
    }

    /// Name of the schedule file holding this day's timetable.
    pub fn schedule_file_name(&self) -> &'static str {
        match self {
            DayType::Weekday => "station_schedule.json",
            DayType::Holiday => "station_schedule_holiday.json",
        }
    }
}

impl FromStr for DayType {
    type Err = InvalidDayType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys() {
        assert_eq!(DayType::parse("weekday"), Ok(DayType::Weekday));
        assert_eq!(DayType::parse("holiday"), Ok(DayType::Holiday));
        assert!(DayType::parse("sunday").is_err());
    }

    #[test]
    fn default_is_weekday() {
        assert_eq!(DayType::default(), DayType::Weekday);
    }

    #[test]
    fn file_names() {
        assert_eq!(
            DayType::Weekday.schedule_file_name(),
            "station_schedule.json"
        );
        assert_eq!(
            DayType::Holiday.schedule_file_name(),
            "station_schedule_holiday.json"
        );
    }
}

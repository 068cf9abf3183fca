//! Time-of-day handling for timetable entries.
//!
//! Schedule files give departure times as "HH:MM" strings. A board only ever
//! looks at a single service day, so times are plain offsets from midnight
//! rather than date-aware values.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, Timelike};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day, stored as minutes since midnight.
///
/// The value is always in `0..1440`.
///
/// # Examples
///
/// ```
/// use departure_board::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("08:10").unwrap();
/// assert_eq!(t.minutes(), 490);
/// assert_eq!(t.to_string(), "08:10");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build a time from minutes since midnight.
    ///
    /// Returns `None` if `minutes` is 1440 or more.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Build a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self((hour * 60 + minute) as u16))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use departure_board::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("0810").is_err());
    /// assert!(ClockTime::parse_hhmm("8:10").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Ok(Self((hour * 60 + minute) as u16))
    }

    /// The current local wall-clock time, truncated to the minute.
    pub fn now() -> Self {
        let now = Local::now();
        // hour() and minute() are bounded by chrono, so this never falls back.
        Self::from_hm(now.hour(), now.minute()).unwrap_or(Self::MIDNIGHT)
    }

    /// Minutes since midnight, in `0..1440`.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Signed minutes from `earlier` to `self`.
    ///
    /// Negative when `self` is before `earlier`. No midnight wrap is applied.
    pub fn minutes_since(&self, earlier: ClockTime) -> i32 {
        i32::from(self.0) - i32::from(earlier.0)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hhmm(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(t("00:00").minutes(), 0);
        assert_eq!(t("23:59").minutes(), 1439);
        assert_eq!(t("08:10").minutes(), 490);

        let time = t("14:30");
        assert_eq!(time.hour(), 14);
        assert_eq!(time.minute(), 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ClockTime::parse_hhmm("1430").is_err());
        assert!(ClockTime::parse_hhmm("14:3").is_err());
        assert!(ClockTime::parse_hhmm("14:300").is_err());
        assert!(ClockTime::parse_hhmm("").is_err());

        // Missing colon
        assert!(ClockTime::parse_hhmm("14-30").is_err());
        assert!(ClockTime::parse_hhmm("14.30").is_err());

        // Non-digit characters
        assert!(ClockTime::parse_hhmm("ab:cd").is_err());
        assert!(ClockTime::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(ClockTime::parse_hhmm("24:00").is_err());
        assert!(ClockTime::parse_hhmm("25:00").is_err());
        assert!(ClockTime::parse_hhmm("12:60").is_err());
        assert!(ClockTime::parse_hhmm("12:99").is_err());
    }

    #[test]
    fn error_display() {
        let err = ClockTime::parse_hhmm("24:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");
    }

    #[test]
    fn display_format() {
        assert_eq!(t("00:00").to_string(), "00:00");
        assert_eq!(t("09:05").to_string(), "09:05");
        assert_eq!(format!("{:?}", t("09:05")), "ClockTime(09:05)");
    }

    #[test]
    fn from_minutes_bounds() {
        assert_eq!(ClockTime::from_minutes(0), Some(ClockTime::MIDNIGHT));
        assert_eq!(ClockTime::from_minutes(1439), Some(t("23:59")));
        assert_eq!(ClockTime::from_minutes(1440), None);
    }

    #[test]
    fn from_hm_bounds() {
        assert_eq!(ClockTime::from_hm(8, 0), Some(t("08:00")));
        assert_eq!(ClockTime::from_hm(24, 0), None);
        assert_eq!(ClockTime::from_hm(0, 60), None);
    }

    #[test]
    fn minutes_since_is_signed() {
        assert_eq!(t("08:10").minutes_since(t("08:00")), 10);
        assert_eq!(t("07:50").minutes_since(t("08:00")), -10);
        assert_eq!(t("08:00").minutes_since(t("08:00")), 0);
    }

    #[test]
    fn ordering() {
        assert!(t("07:50") < t("08:00"));
        assert!(t("23:59") > t("00:00"));
    }

    #[test]
    fn serde_uses_hhmm_strings() {
        let parsed: ClockTime = serde_json::from_str("\"08:30\"").unwrap();
        assert_eq!(parsed, t("08:30"));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"08:30\"");

        assert!(serde_json::from_str::<ClockTime>("\"8:30\"").is_err());
    }

    #[test]
    fn now_is_in_range() {
        assert!(ClockTime::now().minutes() < MINUTES_PER_DAY);
    }
}

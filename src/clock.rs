//! Wall-clock `HH:MM` times measured in minutes since midnight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("expected a time in the format HH:MM, got {0:?}")]
    Format(String),
    #[error("invalid {component} in time {input:?}")]
    Component {
        component: &'static str,
        input: String,
    },
    #[error("time {0:?} is out of range")]
    OutOfRange(String),
}

/// A time of day with minute resolution.
///
/// Ordering follows the linear minutes-since-midnight value, so there is no
/// notion of wrapping past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Re-encodes a minutes-since-midnight value. Values past `23:59` are
    /// rejected.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        let hour = u8::try_from(minutes / 60).ok()?;
        let minute = (minutes % 60) as u8;
        Self::new(hour, minute)
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Signed difference `self - other` in minutes.
    pub fn minutes_since(self, other: ClockTime) -> i64 {
        i64::from(self.minutes()) - i64::from(other.minutes())
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeError::Format(s.to_string()))?;

        let component = |component: &'static str, text: &str| {
            text.parse::<u8>().map_err(|_| TimeError::Component {
                component,
                input: s.to_string(),
            })
        };

        let hour = component("hour", hour)?;
        let minute = component("minute", minute)?;

        ClockTime::new(hour, minute).ok_or_else(|| TimeError::OutOfRange(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_parse_padded_and_unpadded() {
        assert_eq!("08:15".parse(), Ok(t(8, 15)));
        assert_eq!("8:15".parse(), Ok(t(8, 15)));
        assert_eq!("00:00".parse(), Ok(t(0, 0)));
        assert_eq!("23:59".parse(), Ok(t(23, 59)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            "08-15".parse::<ClockTime>(),
            Err(TimeError::Format("08-15".to_string()))
        );
        assert_eq!(
            "ab:15".parse::<ClockTime>(),
            Err(TimeError::Component {
                component: "hour",
                input: "ab:15".to_string()
            })
        );
        assert_eq!(
            "08:cd".parse::<ClockTime>(),
            Err(TimeError::Component {
                component: "minute",
                input: "08:cd".to_string()
            })
        );
        assert!("08:".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            "24:00".parse::<ClockTime>(),
            Err(TimeError::OutOfRange("24:00".to_string()))
        );
        assert!("12:60".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_minutes_round_trip() {
        assert_eq!(t(8, 15).minutes(), 495);
        assert_eq!(ClockTime::from_minutes(495), Some(t(8, 15)));
        assert_eq!(ClockTime::from_minutes(24 * 60), None);
    }

    #[test]
    fn test_minutes_since() {
        assert_eq!(t(8, 30).minutes_since(t(8, 15)), 15);
        assert_eq!(t(7, 55).minutes_since(t(8, 15)), -20);
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(t(7, 5).to_string(), "07:05");
        assert_eq!(t(13, 40).to_string(), "13:40");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&t(8, 5)).unwrap();
        assert_eq!(json, "\"08:05\"");
        let back: ClockTime = serde_json::from_str("\"8:05\"").unwrap();
        assert_eq!(back, t(8, 5));
        assert!(serde_json::from_str::<ClockTime>("\"nope\"").is_err());
    }
}

use crate::analyzers::types::{ArrivalAnalysis, ArrivalStatus};
use crate::clock::{ClockTime, TimeError};
use std::fmt;

/// Target arrival time used when nothing else is configured.
pub const DEFAULT_TARGET_TIME: ClockTime = match ClockTime::new(8, 15) {
    Some(t) => t,
    None => panic!("invalid default target time"),
};

/// Classifies an `HH:MM` arrival against an `HH:MM` target.
///
/// # Errors
///
/// Returns a [`TimeError`] if either string is not a valid time.
pub fn classify(arrival: &str, target: &str) -> Result<ArrivalAnalysis, TimeError> {
    Ok(classify_time(arrival.parse()?, target.parse()?))
}

/// Classifies an arrival against a target.
///
/// | `arrival - target` | Status  | Minutes |
/// |--------------------|---------|---------|
/// | 0                  | on-time | 0       |
/// | > 0                | delayed | diff    |
/// | < 0                | early   | \|diff\|  |
pub fn classify_time(arrival: ClockTime, target: ClockTime) -> ArrivalAnalysis {
    let diff = arrival.minutes_since(target);
    let minutes = diff.unsigned_abs() as u32;

    let status = match diff {
        0 => ArrivalStatus::OnTime,
        d if d > 0 => ArrivalStatus::Delayed,
        _ => ArrivalStatus::Early,
    };

    ArrivalAnalysis { status, minutes }
}

/// Display text for an analysis, e.g. `"Delayed by 7 min"` or `"On Time"`.
pub fn describe(analysis: &ArrivalAnalysis) -> String {
    analysis.to_string()
}

impl fmt::Display for ArrivalAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.status {
            ArrivalStatus::OnTime => return f.write_str("On Time"),
            ArrivalStatus::Early => "Early",
            ArrivalStatus::Delayed => "Delayed",
        };
        write!(f, "{direction} by {} min", self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        assert_eq!(DEFAULT_TARGET_TIME.to_string(), "08:15");
    }

    #[test]
    fn test_classify_on_time() {
        assert_eq!(
            classify("08:15", "08:15").unwrap(),
            ArrivalAnalysis {
                status: ArrivalStatus::OnTime,
                minutes: 0
            }
        );
        assert_eq!(
            classify("06:40", "06:40").unwrap().status,
            ArrivalStatus::OnTime
        );
    }

    #[test]
    fn test_classify_delayed() {
        assert_eq!(
            classify("08:22", "08:15").unwrap(),
            ArrivalAnalysis {
                status: ArrivalStatus::Delayed,
                minutes: 7
            }
        );
        assert_eq!(classify("09:15", "08:15").unwrap().minutes, 60);
    }

    #[test]
    fn test_classify_early() {
        assert_eq!(
            classify("07:55", "08:15").unwrap(),
            ArrivalAnalysis {
                status: ArrivalStatus::Early,
                minutes: 20
            }
        );
    }

    #[test]
    fn test_classify_with_alternate_target() {
        let analysis = classify("08:15", "08:00").unwrap();
        assert_eq!(analysis.status, ArrivalStatus::Delayed);
        assert_eq!(analysis.minutes, 15);
    }

    #[test]
    fn test_classify_every_minute_around_target() {
        let target = DEFAULT_TARGET_TIME;
        for d in 1..=60u32 {
            let later = ClockTime::from_minutes(target.minutes() + d).unwrap();
            let earlier = ClockTime::from_minutes(target.minutes() - d).unwrap();
            assert_eq!(
                classify_time(later, target),
                ArrivalAnalysis {
                    status: ArrivalStatus::Delayed,
                    minutes: d
                }
            );
            assert_eq!(
                classify_time(earlier, target),
                ArrivalAnalysis {
                    status: ArrivalStatus::Early,
                    minutes: d
                }
            );
        }
    }

    #[test]
    fn test_classify_malformed_fails() {
        assert!(classify("eight", "08:15").is_err());
        assert!(classify("08:15", "8.15").is_err());
    }

    #[test]
    fn test_describe() {
        let delayed = ArrivalAnalysis {
            status: ArrivalStatus::Delayed,
            minutes: 7,
        };
        let early = ArrivalAnalysis {
            status: ArrivalStatus::Early,
            minutes: 12,
        };
        let on_time = ArrivalAnalysis {
            status: ArrivalStatus::OnTime,
            minutes: 0,
        };

        assert_eq!(describe(&delayed), "Delayed by 7 min");
        assert_eq!(describe(&early), "Early by 12 min");
        assert_eq!(describe(&on_time), "On Time");
    }
}

use crate::time::error::TimeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Magnitude unit of a Unix timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TimeUnit {
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "us")]
    Microseconds,
    #[serde(rename = "ns")]
    Nanoseconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Seconds,
        TimeUnit::Milliseconds,
        TimeUnit::Microseconds,
        TimeUnit::Nanoseconds,
    ];

    /// Short code used in URLs, CLI flags and JSON
    pub fn code(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
        }
    }

    /// Human-readable name shown next to the detected unit
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Milliseconds => "Milliseconds",
            TimeUnit::Microseconds => "Microseconds",
            TimeUnit::Nanoseconds => "Nanoseconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeUnit {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" => Ok(TimeUnit::Seconds),
            "ms" => Ok(TimeUnit::Milliseconds),
            "us" => Ok(TimeUnit::Microseconds),
            "ns" => Ok(TimeUnit::Nanoseconds),
            _ => Err(TimeError::UnknownUnit(s.to_string())),
        }
    }
}

/// Guess the unit of a timestamp from the number of digits in its integer part.
///
/// Seconds timestamps are ~10 digits today and every finer unit adds three,
/// so anything up to 11 digits is read as seconds, up to 14 as milliseconds,
/// up to 17 as microseconds and the rest as nanoseconds. Very old or far-future
/// values can land in the wrong bucket; the thresholds are kept as they are.
pub fn detect_unit(magnitude: f64) -> TimeUnit {
    match digit_count(magnitude) {
        i32::MIN..=11 => TimeUnit::Seconds,
        12..=14 => TimeUnit::Milliseconds,
        15..=17 => TimeUnit::Microseconds,
        _ => TimeUnit::Nanoseconds,
    }
}

// floor(log10(|x|)) + 1, never below 1 (covers 0, NaN and |x| < 1)
fn digit_count(magnitude: f64) -> i32 {
    let log = magnitude.abs().log10().floor();
    if log.is_finite() {
        (log as i32 + 1).max(1)
    } else if log == f64::INFINITY {
        i32::MAX
    } else {
        1
    }
}

/// Convert a value in `unit` to milliseconds since the epoch.
///
/// Seconds keep their fractional part as fractional milliseconds; the
/// sub-millisecond units are floored.
pub fn normalize_to_millis(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Seconds => value * 1000.0,
        TimeUnit::Milliseconds => value,
        TimeUnit::Microseconds => (value / 1000.0).floor(),
        TimeUnit::Nanoseconds => (value / 1_000_000.0).floor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_current_era_timestamps() {
        assert_eq!(detect_unit(1700000000.0), TimeUnit::Seconds);
        assert_eq!(detect_unit(1700000000000.0), TimeUnit::Milliseconds);
        assert_eq!(detect_unit(1700000000000000.0), TimeUnit::Microseconds);
        assert_eq!(detect_unit(1700000000000000000.0), TimeUnit::Nanoseconds);
    }

    #[test]
    fn test_detect_fractional_values() {
        assert_eq!(detect_unit(1679876543.123), TimeUnit::Seconds);
        assert_eq!(detect_unit(1.5), TimeUnit::Seconds);
        assert_eq!(detect_unit(0.25), TimeUnit::Seconds);
    }

    #[test]
    fn test_detect_bucket_boundaries() {
        // 11 digits is still seconds, 12 is milliseconds
        assert_eq!(detect_unit(99_999_999_999.0), TimeUnit::Seconds);
        assert_eq!(detect_unit(100_000_000_000.0), TimeUnit::Milliseconds);
        assert_eq!(detect_unit(12_345_678_901_234.0), TimeUnit::Milliseconds);
        assert_eq!(detect_unit(99_999_999_999_999.0), TimeUnit::Milliseconds);
        assert_eq!(detect_unit(100_000_000_000_000.0), TimeUnit::Microseconds);
        assert_eq!(detect_unit(1e16), TimeUnit::Microseconds);
        assert_eq!(detect_unit(99_999_999_999_999_000.0), TimeUnit::Microseconds);
        assert_eq!(detect_unit(1e17), TimeUnit::Nanoseconds);
        assert_eq!(detect_unit(1e25), TimeUnit::Nanoseconds);
    }

    #[test]
    fn test_detect_seventeen_nines_rounds_to_eighteen_digits() {
        // 99_999_999_999_999_999 is not representable and becomes exactly 1e17
        let nines = 99_999_999_999_999_999.0_f64;
        assert_eq!(nines, 1e17);
        assert_eq!(detect_unit(nines), TimeUnit::Nanoseconds);
    }

    #[test]
    fn test_detect_degenerate_inputs() {
        assert_eq!(detect_unit(0.0), TimeUnit::Seconds);
        assert_eq!(detect_unit(-0.0), TimeUnit::Seconds);
        assert_eq!(detect_unit(f64::NAN), TimeUnit::Seconds);
        assert_eq!(detect_unit(f64::INFINITY), TimeUnit::Nanoseconds);
    }

    #[test]
    fn test_detect_negative_uses_magnitude() {
        assert_eq!(detect_unit(-1700000000.0), TimeUnit::Seconds);
        assert_eq!(detect_unit(-1700000000000.0), TimeUnit::Milliseconds);
    }

    #[test]
    fn test_normalize_each_unit() {
        assert_eq!(normalize_to_millis(1.0, TimeUnit::Seconds), 1000.0);
        assert_eq!(normalize_to_millis(1000.0, TimeUnit::Milliseconds), 1000.0);
        assert_eq!(normalize_to_millis(1000000.0, TimeUnit::Microseconds), 1000.0);
        assert_eq!(normalize_to_millis(1000000000.0, TimeUnit::Nanoseconds), 1000.0);
    }

    #[test]
    fn test_normalize_fractional_seconds() {
        assert_eq!(
            normalize_to_millis(1679876543.123, TimeUnit::Seconds),
            1679876543123.0
        );
        assert_eq!(normalize_to_millis(1.5, TimeUnit::Seconds), 1500.0);
    }

    #[test]
    fn test_normalize_floors_sub_millisecond_units() {
        assert_eq!(normalize_to_millis(1999.0, TimeUnit::Microseconds), 1.0);
        assert_eq!(normalize_to_millis(1_999_999.0, TimeUnit::Nanoseconds), 1.0);
        assert_eq!(normalize_to_millis(-1.0, TimeUnit::Microseconds), -1.0);
        assert_eq!(normalize_to_millis(-1.0, TimeUnit::Nanoseconds), -1.0);
    }

    #[test]
    fn test_normalize_milliseconds_is_idempotent() {
        for x in [0.0, 1.5, 1700000000000.0, -42.0] {
            let once = normalize_to_millis(x, TimeUnit::Milliseconds);
            assert_eq!(normalize_to_millis(once, TimeUnit::Milliseconds), once);
        }
    }

    #[test]
    fn test_labels_and_codes() {
        let labels: Vec<_> = TimeUnit::ALL.iter().map(|u| u.label()).collect();
        assert_eq!(
            labels,
            vec!["Seconds", "Milliseconds", "Microseconds", "Nanoseconds"]
        );
        for unit in TimeUnit::ALL {
            assert_eq!(unit.code().parse::<TimeUnit>().unwrap(), unit);
        }
        assert_eq!(TimeUnit::Microseconds.to_string(), "Microseconds");
    }

    #[test]
    fn test_parse_unit_code() {
        assert_eq!("MS".parse::<TimeUnit>().unwrap(), TimeUnit::Milliseconds);
        assert_eq!(" ns ".parse::<TimeUnit>().unwrap(), TimeUnit::Nanoseconds);
        assert!(matches!(
            "minutes".parse::<TimeUnit>(),
            Err(TimeError::UnknownUnit(s)) if s == "minutes"
        ));
    }

    #[test]
    fn test_unit_serializes_as_code() {
        let json = serde_json::to_string(&TimeUnit::Microseconds).unwrap();
        assert_eq!(json, "\"us\"");
        let unit: TimeUnit = serde_json::from_str("\"ns\"").unwrap();
        assert_eq!(unit, TimeUnit::Nanoseconds);
    }
}

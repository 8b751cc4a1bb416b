use crate::time::error::TimeError;
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

// Farthest back to look for the offset in effect before a skipped interval
const GAP_SEARCH_LIMIT_MINUTES: i64 = 48 * 60;
const GAP_SEARCH_STEP_MINUTES: i64 = 15;

/// Result of turning a picked date back into a Unix timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateToTimestamp {
    pub input: String,
    pub seconds: i64,
    pub millis: i64,
    pub timezone: String,
}

/// Interpret a `datetime-local` style value as wall-clock time in `tz`
pub fn date_to_timestamp(input: &str, tz: Tz) -> Result<DateToTimestamp, TimeError> {
    let trimmed = input.trim();
    let naive = parse_local_datetime(trimmed)
        .ok_or_else(|| TimeError::InvalidDate(trimmed.to_string()))?;

    // Earliest of two candidates when the clock is set back
    let millis = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => resolve_skipped(&naive, tz)
            .ok_or_else(|| TimeError::NonexistentLocalTime(trimmed.to_string()))?
            .timestamp_millis(),
    };

    tracing::debug!(input = trimmed, timezone = %tz, millis, "converted date to timestamp");

    Ok(DateToTimestamp {
        input: trimmed.to_string(),
        seconds: millis.div_euclid(1000),
        millis,
        timezone: tz.name().to_string(),
    })
}

// A wall-clock time skipped when the clock jumps forward keeps the offset
// from before the jump, so 02:30 in a 02:00 -> 03:00 gap lands on 03:30.
fn resolve_skipped(naive: &NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    let before = (1..=GAP_SEARCH_LIMIT_MINUTES / GAP_SEARCH_STEP_MINUTES).find_map(|step| {
        let earlier = *naive - Duration::minutes(step * GAP_SEARCH_STEP_MINUTES);
        tz.from_local_datetime(&earlier).latest()
    })?;
    let offset = Duration::seconds(before.offset().fix().local_minus_utc() as i64);
    Some(Utc.from_utc_datetime(&(*naive - offset)))
}

fn parse_local_datetime(input: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

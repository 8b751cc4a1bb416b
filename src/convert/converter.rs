use crate::convert::formatter::{
    format_relative, format_utc_display, format_utc_iso, format_zoned, to_instant,
};
use crate::time::{detect_unit, normalize_to_millis, parse_timestamp_input, TimeUnit};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// What the user typed plus the widget state around it
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: String,
    /// Manual unit override; detection is used when absent
    pub unit: Option<TimeUnit>,
    pub timezone: Tz,
}

impl ConversionRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            unit: None,
            timezone: Tz::UTC,
        }
    }

    pub fn with_unit(mut self, unit: Option<TimeUnit>) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

/// Everything shown for one timestamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub value: f64,
    pub detected_unit: TimeUnit,
    pub effective_unit: TimeUnit,
    pub millis: i64,
    pub utc_iso: String,
    pub utc_display: String,
    pub relative: String,
    pub timezone: String,
    pub zoned: String,
}

impl Conversion {
    pub fn detected_label(&self) -> &'static str {
        self.detected_unit.label()
    }
}

/// Timestamp to date conversion with an optional default unit.
pub struct Converter {
    default_unit: Option<TimeUnit>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self { default_unit: None }
    }

    /// Use `unit` whenever a request carries no override of its own
    pub fn with_default_unit(default_unit: Option<TimeUnit>) -> Self {
        Self { default_unit }
    }

    /// Convert a request relative to `now`.
    ///
    /// Returns `None` when there is nothing to show: the input has no number
    /// in it, or the resulting instant is outside the supported date range.
    pub fn convert(&self, request: &ConversionRequest, now: &DateTime<Utc>) -> Option<Conversion> {
        let value = parse_timestamp_input(&request.input)?;

        let detected_unit = detect_unit(value);
        let effective_unit = request.unit.or(self.default_unit).unwrap_or(detected_unit);
        let millis = normalize_to_millis(value, effective_unit);

        let instant = match to_instant(millis) {
            Some(instant) => instant,
            None => {
                tracing::debug!(value, unit = effective_unit.code(), "timestamp out of range");
                return None;
            }
        };

        tracing::debug!(
            value,
            detected = detected_unit.code(),
            effective = effective_unit.code(),
            millis = instant.timestamp_millis(),
            "converted timestamp"
        );

        Some(Conversion {
            input: request.input.clone(),
            value,
            detected_unit,
            effective_unit,
            millis: instant.timestamp_millis(),
            utc_iso: format_utc_iso(&instant),
            utc_display: format_utc_display(&instant),
            relative: format_relative(&instant, now),
            timezone: request.timezone.name().to_string(),
            zoned: format_zoned(&instant, request.timezone),
        })
    }
}

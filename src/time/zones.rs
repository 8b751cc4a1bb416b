use crate::time::error::TimeError;
use chrono_tz::Tz;

/// Timezones offered by the selector and accepted from the `tz` URL parameter
pub const TIMEZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Anchorage",
    "America/Toronto",
    "America/Vancouver",
    "America/Mexico_City",
    "America/Sao_Paulo",
    "America/Argentina/Buenos_Aires",
    "Europe/London",
    "Europe/Dublin",
    "Europe/Lisbon",
    "Europe/Paris",
    "Europe/Berlin",
    "Europe/Madrid",
    "Europe/Rome",
    "Europe/Amsterdam",
    "Europe/Stockholm",
    "Europe/Warsaw",
    "Europe/Athens",
    "Europe/Istanbul",
    "Europe/Moscow",
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "Africa/Nairobi",
    "Asia/Dubai",
    "Asia/Karachi",
    "Asia/Kolkata",
    "Asia/Dhaka",
    "Asia/Bangkok",
    "Asia/Jakarta",
    "Asia/Singapore",
    "Asia/Hong_Kong",
    "Asia/Shanghai",
    "Asia/Taipei",
    "Asia/Seoul",
    "Asia/Tokyo",
    "Australia/Perth",
    "Australia/Adelaide",
    "Australia/Sydney",
    "Pacific/Auckland",
    "Pacific/Honolulu",
];

pub fn is_known_timezone(name: &str) -> bool {
    TIMEZONES.contains(&name)
}

/// Look up any IANA identifier chrono-tz knows about
pub fn resolve_timezone(name: &str) -> Result<Tz, TimeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

/// Zone of the machine or browser running the converter, UTC when unknown
pub fn local_timezone() -> Tz {
    zone_or_utc(system_timezone_name())
}

fn zone_or_utc(name: Option<String>) -> Tz {
    match name.as_deref().map(resolve_timezone) {
        Some(Ok(tz)) => tz,
        Some(Err(e)) => {
            tracing::debug!("Falling back to UTC: {}", e);
            Tz::UTC
        }
        None => Tz::UTC,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn system_timezone_name() -> Option<String> {
    iana_time_zone::get_timezone()
        .map_err(|e| tracing::debug!("Could not read the system timezone: {}", e))
        .ok()
}

// Intl.DateTimeFormat().resolvedOptions().timeZone
#[cfg(target_arch = "wasm32")]
fn system_timezone_name() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    js_sys::Reflect::get(&format.resolved_options(), &"timeZone".into())
        .ok()
        .and_then(|zone| zone.as_string())
}

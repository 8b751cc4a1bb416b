use chrono::{DateTime, Datelike, Months, Utc};
use chrono_tz::Tz;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

// Farthest a browser Date reaches from the epoch, either way
const MAX_DATE_MILLIS: f64 = 8.64e15;

/// Build an instant from epoch milliseconds, truncating any fraction.
/// Returns `None` beyond the browser Date range or what chrono can represent.
pub fn to_instant(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    let whole = millis.trunc();
    if whole.abs() > MAX_DATE_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(whole as i64)
}

/// `2023-11-14T22:13:20.000Z`; years outside 0..=9999 get a sign and six
/// digits, `+010000-01-01T00:00:00.000Z`
pub fn format_utc_iso(instant: &DateTime<Utc>) -> String {
    format!(
        "{}-{}",
        iso_year(instant.year()),
        instant.format("%m-%dT%H:%M:%S%.3fZ")
    )
}

fn iso_year(year: i32) -> String {
    match year {
        0..=9999 => format!("{:04}", year),
        y if y < 0 => format!("-{:06}", -(y as i64)),
        y => format!("+{:06}", y),
    }
}

/// `2023-11-14 22:13:20.000 UTC`
pub fn format_utc_display(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string()
}

/// Wall-clock time in `tz`, `2023-11-14 17:13:20`
pub fn format_zoned(instant: &DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Distance between `instant` and `now` in words, e.g. "3 hours ago" or
/// "in about 1 month".
pub fn format_relative(instant: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let distance = if instant > now {
        format_distance(now, instant)
    } else {
        format_distance(instant, now)
    };

    if instant > now {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

// Word form of the gap between two ordered instants.
fn format_distance(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> String {
    let seconds = (*later - *earlier).num_seconds();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45 {
        return format!("{} minutes", minutes);
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        return plural(hours, "about 1 hour", "about {} hours");
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return plural(days, "1 day", "{} days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(months, "about 1 month", "about {} months");
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        let nearest = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(nearest, "1 month", "{} months");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => plural(years, "about 1 year", "about {} years"),
        3..=8 => plural(years, "over 1 year", "over {} years"),
        _ => plural(years + 1, "almost 1 year", "almost {} years"),
    }
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{}", &count.to_string())
    }
}

// Whole calendar months from `earlier` to `later`; a partial last month does not count.
fn calendar_months_between(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> i64 {
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12
        + (later.month() as i64 - earlier.month() as i64);
    if months <= 0 {
        return 0;
    }
    let reached = u32::try_from(months)
        .ok()
        .and_then(|m| earlier.checked_add_months(Months::new(m)));
    match reached {
        Some(date) if date > *later => months -= 1,
        Some(_) => {}
        None => months -= 1,
    }
    months
}

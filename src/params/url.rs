use crate::time::{is_known_timezone, TimeUnit};
use serde::Serialize;

/// State that can be pre-filled from `?time=..&unit=..&tz=..`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParams {
    pub time: Option<String>,
    pub unit: Option<TimeUnit>,
    pub tz: Option<String>,
}

impl UrlParams {
    /// Parse a query string, with or without the leading `?`, or a full URL.
    ///
    /// Only the first occurrence of each key counts. An unrecognised `unit`
    /// or a `tz` outside the known list is dropped.
    pub fn parse(input: &str) -> Self {
        let query = extract_query(input);
        let mut params = UrlParams::default();
        let mut seen_unit = false;
        let mut seen_tz = false;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let value = decode_component(raw_value);

            match key.as_str() {
                "time" if params.time.is_none() => params.time = Some(value),
                "unit" if !seen_unit => {
                    seen_unit = true;
                    match value.parse::<TimeUnit>() {
                        Ok(unit) => params.unit = Some(unit),
                        Err(e) => tracing::warn!("Ignoring unit parameter: {}", e),
                    }
                }
                "tz" if !seen_tz => {
                    seen_tz = true;
                    if is_known_timezone(&value) {
                        params.tz = Some(value);
                    } else {
                        tracing::warn!(tz = %value, "Ignoring timezone outside the known list");
                    }
                }
                _ => {}
            }
        }

        params
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.unit.is_none() && self.tz.is_none()
    }

    /// Build a shareable query string (`?time=...`), empty when nothing is set
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(time) = &self.time {
            parts.push(format!("time={}", urlencoding::encode(time)));
        }
        if let Some(unit) = self.unit {
            parts.push(format!("unit={}", unit.code()));
        }
        if let Some(tz) = &self.tz {
            parts.push(format!("tz={}", urlencoding::encode(tz)));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

fn extract_query(input: &str) -> &str {
    let trimmed = input.trim();
    let without_fragment = trimmed.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None => without_fragment,
    }
}

// application/x-www-form-urlencoded: '+' is a space, then percent-decode.
// Malformed escapes fall back to the raw text.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

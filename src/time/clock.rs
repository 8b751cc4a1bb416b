// Wall clock access. Browsers get the time from `Date.now()` so the same
// code runs under wasm-bindgen without relying on std::time.

use chrono::{DateTime, Utc};

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> DateTime<Utc> {
    let millis = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// Current Unix time in whole seconds
pub fn current_timestamp() -> i64 {
    now().timestamp()
}

// Timestamp unit sniffing and normalization, plus the small helpers around it
// (input cleaning, timezone catalogue, wall clock).

pub mod clock;
pub mod error;
pub mod input;
pub mod units;
pub mod zones;

pub use clock::current_timestamp;
pub use error::TimeError;
pub use input::{clean_timestamp_input, parse_timestamp_input};
pub use units::{detect_unit, normalize_to_millis, TimeUnit};
pub use zones::{is_known_timezone, local_timezone, resolve_timezone, TIMEZONES};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("Unknown time unit '{0}' (expected s, ms, us or ns)")]
    UnknownUnit(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DDTHH:MM[:SS])")]
    InvalidDate(String),

    /// Wall-clock time skipped by a DST transition
    #[error("Local time '{0}' does not exist in the selected timezone")]
    NonexistentLocalTime(String),

    #[error("Timestamp {0} ms is outside the representable date range")]
    OutOfRange(f64),
}

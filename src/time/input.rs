use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything that cannot be part of a plain decimal timestamp
    static ref NON_NUMERIC: Regex = Regex::new(r"[^0-9.]").unwrap();

    /// Longest leading decimal number, e.g. "12.34" out of "12.34.56"
    static ref LEADING_NUMBER: Regex = Regex::new(r"^(\d+\.?\d*|\.\d+)").unwrap();
}

/// Strip separators, signs and letters, keeping only digits and dots
pub fn clean_timestamp_input(input: &str) -> String {
    NON_NUMERIC.replace_all(input, "").into_owned()
}

/// Parse user-typed timestamp text.
///
/// Returns `None` when nothing numeric is left after cleaning, which callers
/// treat as "no value to convert" rather than an error.
pub fn parse_timestamp_input(input: &str) -> Option<f64> {
    let cleaned = clean_timestamp_input(input);
    let number = LEADING_NUMBER.find(&cleaned)?;
    number.as_str().parse::<f64>().ok()
}

//! String format detection for schema inference

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::FieldType;

// ISO date, optionally with a time component
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}([T ]\d{2}:\d{2}(:\d{2})?(\.\d+)?(Z|[+-]\d{2}:?\d{2})?)?$")
        .unwrap()
});

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d[\d\s().-]{6,18}\d$").unwrap());

/// Classify a string value into a semantic field type.
///
/// Checks date, then email, then phone, falling through to plain string.
pub fn classify_string(value: &str) -> FieldType {
    let value = value.trim();
    if DATE_REGEX.is_match(value) {
        return FieldType::Date;
    }
    if EMAIL_REGEX.is_match(value) {
        return FieldType::Email;
    }
    if looks_like_phone(value) {
        return FieldType::Phone;
    }
    FieldType::String
}

/// The shape regex alone accepts any digit-led run of digits and separators,
/// which would swallow malformed dates and dash-separated numeric codes.
/// Require an E.164-plausible digit count on top of the shape.
fn looks_like_phone(value: &str) -> bool {
    if !PHONE_REGEX.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
}

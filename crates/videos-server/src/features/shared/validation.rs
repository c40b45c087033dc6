//! Shared validation utilities
//!
//! Field-agnostic checks over raw JSON values. Feature validators call these
//! and turn the failures into their own field messages.
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde_json::json;
//! use videos_server::features::shared::validation::{validate_trimmed_text, validate_integer_range};
//!
//! let title = validate_trimmed_text(&json!("  Intro  "), 40)?; // "Intro"
//! let age = validate_integer_range(&json!(12), 1, 18)?;        // 12
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during text validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextValidationError {
    #[error("Value must be a string")]
    NotAString,

    #[error("Value cannot be empty or only whitespace")]
    Empty,

    #[error("Value must be at most {max_length} characters")]
    TooLong { max_length: usize },
}

/// Errors that can occur during integer range validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeValidationError {
    #[error("Value must be an integer")]
    NotAnInteger,

    #[error("Value must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },
}

/// Errors that can occur during timestamp validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampValidationError {
    #[error("Value must be a string")]
    NotAString,

    #[error("'{0}' is not a valid date")]
    Unparseable(String),
}

/// Validate a free-text field and return it trimmed
///
/// # Rules
/// - Must be a JSON string
/// - Must not be empty after trimming whitespace
/// - Must not exceed `max_length` characters after trimming
pub fn validate_trimmed_text(value: &Value, max_length: usize) -> Result<String, TextValidationError> {
    let text = value.as_str().ok_or(TextValidationError::NotAString)?.trim();

    if text.is_empty() {
        return Err(TextValidationError::Empty);
    }

    if text.chars().count() > max_length {
        return Err(TextValidationError::TooLong { max_length });
    }

    Ok(text.to_string())
}

/// Validate that a JSON value is an integer within `min..=max`
///
/// Integral floats such as `12.0` or `1.2e1` count as integers; numbers with
/// a fractional part do not.
pub fn validate_integer_range(value: &Value, min: i64, max: i64) -> Result<i64, RangeValidationError> {
    let number = value
        .as_i64()
        .or_else(|| integral_float(value))
        .ok_or(RangeValidationError::NotAnInteger)?;

    if !(min..=max).contains(&number) {
        return Err(RangeValidationError::OutOfRange { min, max });
    }

    Ok(number)
}

fn integral_float(value: &Value) -> Option<i64> {
    let float = value.as_f64()?;
    let in_i64_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.is_finite() && float.fract() == 0.0 && in_i64_range).then_some(float as i64)
}

/// Validate a JSON string holding a date or date-time
pub fn validate_timestamp(value: &Value) -> Result<DateTime<Utc>, TimestampValidationError> {
    let raw = value.as_str().ok_or(TimestampValidationError::NotAString)?;
    parse_timestamp(raw).ok_or_else(|| TimestampValidationError::Unparseable(raw.to_string()))
}

/// Parse an ISO-8601 date or date-time into UTC
///
/// Accepted forms:
/// - RFC 3339 with an offset: `2026-10-17T09:30:00+02:00`, `2026-10-17T09:30:00.123Z`
/// - Date-time without an offset, read as UTC: `2026-10-17T09:30:00`
/// - Plain date, read as midnight UTC: `2026-10-17`
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

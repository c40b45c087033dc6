//! Video payload validation
//!
//! The rules run independently, one per field, always in the same order, and
//! every violation is collected so a caller sees all bad fields at once.
//!
//! | Field | Create | Update |
//! |---|---|---|
//! | `title` | required, 1..=40 trimmed chars | checked if present |
//! | `author` | required, 1..=20 trimmed chars | checked if present |
//! | `availableResolutions` | checked if present | checked if present |
//! | `canBeDownloaded` | checked if present | checked if present |
//! | `minAgeRestriction` | `null` or 1..=18 | `null` or 1..=18 |
//! | `publicationDate` | ignored | checked if present |

use chrono::{DateTime, Utc};
use serde_json::Value;
use videos_common::types::{Presence, Resolution};

use super::types::{FieldError, ValidationErrors, ValidationMode, VideoPayload};
use crate::features::shared::validation::{
    validate_integer_range, validate_timestamp, validate_trimmed_text,
};
use crate::models::{NewVideo, VideoChanges};

pub const MAX_TITLE_LENGTH: usize = 40;
pub const MAX_AUTHOR_LENGTH: usize = 20;
pub const MIN_AGE_RESTRICTION: i64 = 1;
pub const MAX_AGE_RESTRICTION: i64 = 18;

/// Payload field names as they appear on the wire
pub mod fields {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const AVAILABLE_RESOLUTIONS: &str = "availableResolutions";
    pub const CAN_BE_DOWNLOADED: &str = "canBeDownloaded";
    pub const MIN_AGE_RESTRICTION: &str = "minAgeRestriction";
    pub const PUBLICATION_DATE: &str = "publicationDate";
}

/// Validate a payload and return every field error, in rule order
///
/// An empty list means the payload is accepted.
pub fn validate(payload: &VideoPayload, mode: ValidationMode) -> Vec<FieldError> {
    match check(payload, mode) {
        Ok(_) => Vec::new(),
        Err(errors) => errors.errors,
    }
}

/// Validate a create payload into the fields the store needs
pub fn check_create(payload: &VideoPayload) -> Result<NewVideo, ValidationErrors> {
    let changes = check(payload, ValidationMode::Create)?;

    // Create-mode `check` only succeeds with both text fields set
    let (Some(title), Some(author)) = (changes.title, changes.author) else {
        return Err(ValidationErrors {
            errors: validate(payload, ValidationMode::Create),
        });
    };

    Ok(NewVideo {
        title,
        author,
        available_resolutions: changes.available_resolutions,
        can_be_downloaded: changes.can_be_downloaded,
        min_age_restriction: changes.min_age_restriction.flatten(),
    })
}

/// Validate an update payload into a partial change set
pub fn check_update(payload: &VideoPayload) -> Result<VideoChanges, ValidationErrors> {
    check(payload, ValidationMode::Update)
}

/// Run every rule and collect normalized values or errors
#[tracing::instrument(level = "debug", skip(payload))]
pub fn check(payload: &VideoPayload, mode: ValidationMode) -> Result<VideoChanges, ValidationErrors> {
    let mut errors = Vec::new();

    let title = record(
        &mut errors,
        text_rule(&payload.title, mode, fields::TITLE, "Title", MAX_TITLE_LENGTH),
    );
    let author = record(
        &mut errors,
        text_rule(&payload.author, mode, fields::AUTHOR, "Author", MAX_AUTHOR_LENGTH),
    );
    let available_resolutions = record(&mut errors, resolutions_rule(&payload.available_resolutions));
    let can_be_downloaded = record(&mut errors, boolean_rule(&payload.can_be_downloaded));
    let min_age_restriction = record(&mut errors, age_rule(&payload.min_age_restriction));
    let publication_date = match mode {
        ValidationMode::Update => record(&mut errors, publication_date_rule(&payload.publication_date)),
        ValidationMode::Create => None,
    };

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "Payload rejected");
        return Err(ValidationErrors { errors });
    }

    Ok(VideoChanges {
        title,
        author,
        available_resolutions,
        can_be_downloaded,
        min_age_restriction,
        publication_date,
    })
}

/// Each rule yields `Ok(None)` for an absent field, `Ok(Some(_))` for a valid one
type RuleOutcome<T> = Result<Option<T>, FieldError>;

fn record<T>(errors: &mut Vec<FieldError>, outcome: RuleOutcome<T>) -> Option<T> {
    outcome.unwrap_or_else(|error| {
        errors.push(error);
        None
    })
}

fn required(field: &str, label: &str) -> FieldError {
    FieldError::new(field, format!("{label} is required"))
}

/// `title` / `author`
///
/// On create, a missing key or a falsy value (`null`, `false`, `0`, `""`)
/// counts as not supplied. A whitespace-only string is supplied but invalid.
fn text_rule(
    value: &Presence<Value>,
    mode: ValidationMode,
    field: &str,
    label: &str,
    max_length: usize,
) -> RuleOutcome<String> {
    let not_supplied = match value {
        Presence::Absent | Presence::Null => true,
        Presence::Value(raw) => is_falsy(raw),
    };

    if mode == ValidationMode::Create && not_supplied {
        return Err(required(field, label));
    }

    let null = Value::Null;
    let raw = match value {
        Presence::Absent => return Ok(None),
        Presence::Null => &null,
        Presence::Value(raw) => raw,
    };

    validate_trimmed_text(raw, max_length).map(Some).map_err(|reason| {
        tracing::debug!(field, %reason, "Text field rejected");
        FieldError::new(
            field,
            format!("{label} must be a string of 1 to {max_length} characters"),
        )
    })
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// `availableResolutions`: an array of known labels, duplicates collapsed
fn resolutions_rule(value: &Presence<Value>) -> RuleOutcome<Vec<Resolution>> {
    let items = match value {
        Presence::Absent => return Ok(None),
        Presence::Null => None,
        Presence::Value(raw) => raw.as_array(),
    };

    let parsed = items.and_then(|items| {
        items.iter().try_fold(Vec::with_capacity(items.len()), |mut acc, item| {
            let resolution = item.as_str()?.parse::<Resolution>().ok()?;
            if !acc.contains(&resolution) {
                acc.push(resolution);
            }
            Some(acc)
        })
    });

    parsed.map(Some).ok_or_else(|| {
        FieldError::new(
            fields::AVAILABLE_RESOLUTIONS,
            format!("Invalid resolutions. Allowed: {}", Resolution::allowed_list()),
        )
    })
}

/// `canBeDownloaded`: a real boolean; `false` is a value, not an absence
fn boolean_rule(value: &Presence<Value>) -> RuleOutcome<bool> {
    match value {
        Presence::Absent => Ok(None),
        Presence::Value(Value::Bool(flag)) => Ok(Some(*flag)),
        Presence::Null | Presence::Value(_) => Err(FieldError::new(
            fields::CAN_BE_DOWNLOADED,
            "canBeDownloaded must be boolean",
        )),
    }
}

/// `minAgeRestriction`: `null` clears it, otherwise an integer in range
fn age_rule(value: &Presence<Value>) -> RuleOutcome<Option<u8>> {
    let raw = match value {
        Presence::Absent => return Ok(None),
        Presence::Null => return Ok(Some(None)),
        Presence::Value(raw) => raw,
    };

    validate_integer_range(raw, MIN_AGE_RESTRICTION, MAX_AGE_RESTRICTION)
        .ok()
        .and_then(|age| u8::try_from(age).ok())
        .map(|age| Some(Some(age)))
        .ok_or_else(|| {
            FieldError::new(
                fields::MIN_AGE_RESTRICTION,
                format!(
                    "minAgeRestriction must be integer between {MIN_AGE_RESTRICTION} and {MAX_AGE_RESTRICTION}"
                ),
            )
        })
}

/// `publicationDate`: a parseable date string, normalized to UTC
fn publication_date_rule(value: &Presence<Value>) -> RuleOutcome<DateTime<Utc>> {
    let null = Value::Null;
    let raw = match value {
        Presence::Absent => return Ok(None),
        Presence::Null => &null,
        Presence::Value(raw) => raw,
    };

    validate_timestamp(raw).map(Some).map_err(|reason| {
        tracing::debug!(%reason, "Publication date rejected");
        FieldError::new(fields::PUBLICATION_DATE, "publicationDate must be valid ISO date")
    })
}

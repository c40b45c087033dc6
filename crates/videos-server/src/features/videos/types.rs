use serde::{Deserialize, Serialize};
use serde_json::Value;
use videos_common::types::Presence;

/// Raw request body for create and update
///
/// Every field keeps whatever JSON the caller sent so the validator can
/// report type errors per field instead of rejecting the whole body.
/// Unknown keys, `id` and `createdAt` included, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPayload {
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub title: Presence<Value>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub author: Presence<Value>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub available_resolutions: Presence<Value>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub can_be_downloaded: Presence<Value>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub min_age_restriction: Presence<Value>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub publication_date: Presence<Value>,
}

/// Which checks are mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// `title` and `author` are required; `publicationDate` is ignored
    Create,
    /// Every field is optional; `publicationDate` is checked when present
    Update,
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.to_string(),
        }
    }
}

/// Every field error found in one payload, in rule order
///
/// Serializes as the `{"errorsMessages": [...]}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    #[serde(rename = "errorsMessages")]
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Whether any entry refers to `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

//! Create video command
//!
//! - Command: the raw payload, validated in create mode
//! - Handler: validates, then inserts through the store under its write lock

use serde::{Deserialize, Serialize};

use crate::features::videos::types::{ValidationErrors, VideoPayload};
use crate::features::videos::validation::check_create;
use crate::models::{NewVideo, VideoRecord};
use crate::store::VideoStore;

/// Command to create a new video
///
/// # Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use videos_server::features::videos::CreateVideoCommand;
///
/// let command = CreateVideoCommand {
///     payload: serde_json::from_value(json!({
///         "title": "Intro",
///         "author": "Ann",
///         "availableResolutions": ["P720"]
///     }))?,
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateVideoCommand {
    pub payload: VideoPayload,
}

/// Errors that can occur when creating a video
#[derive(Debug, thiserror::Error)]
pub enum CreateVideoError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl CreateVideoCommand {
    /// Validates the payload and returns the fields to insert
    ///
    /// # Errors
    ///
    /// Every failing field is reported at once, in rule order.
    pub fn validate(&self) -> Result<NewVideo, CreateVideoError> {
        Ok(check_create(&self.payload)?)
    }
}

/// Handler function for creating videos
///
/// Nothing is inserted when validation fails.
#[tracing::instrument(skip(store, command))]
pub fn handle(store: &VideoStore, command: CreateVideoCommand) -> Result<VideoRecord, CreateVideoError> {
    let new_video = command.validate().inspect_err(|e| {
        let CreateVideoError::Validation(errors) = e;
        tracing::warn!(count = errors.errors.len(), fields = ?errors.fields(), "Create payload rejected");
    })?;

    let video = store.create(new_video);

    tracing::info!(video_id = video.id, title = %video.title, "Video created");

    Ok(video)
}

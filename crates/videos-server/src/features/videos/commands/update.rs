//! Update video command
//!
//! Existence is checked before the payload, so an unknown id is reported as
//! not found even when the body is also invalid.

use crate::features::videos::types::{ValidationErrors, VideoPayload};
use crate::features::videos::validation::check_update;
use crate::models::{VideoChanges, VideoRecord};
use crate::store::{StoreError, VideoStore};

/// Command to partially update a video
#[derive(Debug, Clone)]
pub struct UpdateVideoCommand {
    pub id: u64,
    pub payload: VideoPayload,
}

/// Errors that can occur when updating a video
#[derive(Debug, thiserror::Error)]
pub enum UpdateVideoError {
    #[error("Video with id {0} not found")]
    NotFound(u64),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl From<StoreError> for UpdateVideoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl UpdateVideoCommand {
    pub fn validate(&self) -> Result<VideoChanges, UpdateVideoError> {
        Ok(check_update(&self.payload)?)
    }
}

/// Handler function for updating videos
///
/// Returns the record as it is after the update. A rejected payload leaves
/// the record untouched.
#[tracing::instrument(skip(store, command), fields(video_id = command.id))]
pub fn handle(store: &VideoStore, command: UpdateVideoCommand) -> Result<VideoRecord, UpdateVideoError> {
    if !store.contains(command.id) {
        tracing::debug!("Video not found");
        return Err(UpdateVideoError::NotFound(command.id));
    }

    let changes = command.validate().inspect_err(|e| {
        if let UpdateVideoError::Validation(errors) = e {
            tracing::warn!(count = errors.errors.len(), fields = ?errors.fields(), "Update payload rejected");
        }
    })?;

    // The record may have been deleted between the two steps
    let video = store.update_fields(command.id, changes)?;

    tracing::info!(video_id = video.id, "Video updated");

    Ok(video)
}

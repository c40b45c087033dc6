//! Delete video command

use crate::store::{StoreError, VideoStore};

#[derive(Debug, Clone, Copy)]
pub struct DeleteVideoCommand {
    pub id: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteVideoError {
    #[error("Video with id {0} not found")]
    NotFound(u64),
}

impl From<StoreError> for DeleteVideoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
        }
    }
}

#[tracing::instrument(skip(store))]
pub fn handle(store: &VideoStore, command: DeleteVideoCommand) -> Result<(), DeleteVideoError> {
    store.delete(command.id)?;

    tracing::info!(video_id = command.id, "Video deleted");

    Ok(())
}

//! Get video query

use crate::models::VideoRecord;
use crate::store::{StoreError, VideoStore};

#[derive(Debug, Clone, Copy)]
pub struct GetVideoQuery {
    pub id: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetVideoError {
    #[error("Video with id {0} not found")]
    NotFound(u64),
}

impl From<StoreError> for GetVideoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
        }
    }
}

#[tracing::instrument(skip(store))]
pub fn handle(store: &VideoStore, query: GetVideoQuery) -> Result<VideoRecord, GetVideoError> {
    let video = store.get(query.id)?;
    tracing::debug!(video_id = video.id, "Video retrieved");
    Ok(video)
}

//! In-memory video store
//!
//! Owns the live collection and the id counter. Every mutation runs under a
//! single write guard, so concurrent handlers never see duplicate ids,
//! half-applied updates or lost deletes.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use thiserror::Error;
use videos_common::types::Resolution;

use crate::models::{NewVideo, VideoChanges, VideoRecord};

/// Errors returned by store lookups
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Video with id {0} not found")]
    NotFound(u64),
}

#[derive(Debug)]
struct StoreState {
    videos: Vec<VideoRecord>,
    next_id: u64,
}

/// Ordered collection of videos with counter-based ids
#[derive(Debug)]
pub struct VideoStore {
    state: RwLock<StoreState>,
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                videos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store pre-populated with one sample video
    pub fn with_demo_record() -> Self {
        let store = Self::new();
        store.create(NewVideo {
            title: "Test Video 1".to_string(),
            author: "Author 1".to_string(),
            available_resolutions: Some(vec![Resolution::P720]),
            can_be_downloaded: Some(false),
            min_age_restriction: None,
        });
        store
    }

    /// All videos in insertion order
    pub fn list(&self) -> Vec<VideoRecord> {
        self.state.read().videos.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: u64) -> Result<VideoRecord, StoreError> {
        self.state
            .read()
            .videos
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.state.read().videos.iter().any(|v| v.id == id)
    }

    /// Insert a video stamped with the current time
    ///
    /// The input must already have passed create-mode validation.
    pub fn create(&self, video: NewVideo) -> VideoRecord {
        self.create_at(video, Utc::now())
    }

    /// Insert a video stamped with `now`; publication is set one day later
    pub fn create_at(&self, video: NewVideo, now: DateTime<Utc>) -> VideoRecord {
        let mut state = self.state.write();

        let id = state.next_id;
        state.next_id += 1;

        let record = VideoRecord {
            id,
            title: video.title,
            author: video.author,
            can_be_downloaded: video.can_be_downloaded.unwrap_or(false),
            min_age_restriction: video.min_age_restriction,
            created_at: now,
            publication_date: now + Duration::days(1),
            available_resolutions: video.available_resolutions.unwrap_or_default(),
        };

        state.videos.push(record.clone());
        record
    }

    /// Overwrite the fields present in `changes` and return the result
    ///
    /// The input must already have passed update-mode validation.
    pub fn update_fields(&self, id: u64, changes: VideoChanges) -> Result<VideoRecord, StoreError> {
        let mut state = self.state.write();
        let video = state
            .videos
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(StoreError::NotFound(id))?;

        changes.apply_to(video);
        Ok(video.clone())
    }

    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let index = state
            .videos
            .iter()
            .position(|v| v.id == id)
            .ok_or(StoreError::NotFound(id))?;

        state.videos.remove(index);
        Ok(())
    }

    /// Remove every video and return how many were dropped
    ///
    /// Ids already issued are never handed out again.
    pub fn reset_all(&self) -> usize {
        let mut state = self.state.write();
        let removed = state.videos.len();
        state.videos.clear();
        removed
    }
}

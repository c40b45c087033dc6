//! Test helpers and fixtures for video tests
//!
//! # Examples
//!
//! ```rust,ignore
//! use videos_server::features::shared::test_helpers::*;
//!
//! let store = VideoStore::new();
//! let video = TestVideo::new("Intro", "Ann")
//!     .with_resolutions(&[Resolution::P720])
//!     .insert(&store);
//! ```

use serde_json::Value;
use videos_common::types::Resolution;

use crate::features::videos::types::VideoPayload;
use crate::models::{NewVideo, VideoRecord};
use crate::store::VideoStore;

/// Deserialize a JSON literal into a payload, exactly as the extractor would
pub fn payload(value: Value) -> VideoPayload {
    serde_json::from_value(value).expect("payload literal should deserialize")
}

/// Builder for inserting videos into a store
#[derive(Debug, Clone)]
pub struct TestVideo {
    video: NewVideo,
}

impl TestVideo {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            video: NewVideo::new(title, author),
        }
    }

    pub fn with_resolutions(mut self, resolutions: &[Resolution]) -> Self {
        self.video.available_resolutions = Some(resolutions.to_vec());
        self
    }

    pub fn with_download(mut self, can_be_downloaded: bool) -> Self {
        self.video.can_be_downloaded = Some(can_be_downloaded);
        self
    }

    pub fn with_age_restriction(mut self, age: u8) -> Self {
        self.video.min_age_restriction = Some(age);
        self
    }

    /// Insert the video into the store
    pub fn insert(self, store: &VideoStore) -> VideoRecord {
        store.create(self.video)
    }
}

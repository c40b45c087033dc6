//! Video models
//!
//! `VideoRecord` is what the store holds and what the API returns.
//! `NewVideo` and `VideoChanges` are the validated inputs for create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use videos_common::types::Resolution;

/// A stored video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub publication_date: DateTime<Utc>,
    pub available_resolutions: Vec<Resolution>,
}

/// Validated fields for a new video
///
/// Optional fields fall back to their defaults in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub author: String,
    pub available_resolutions: Option<Vec<Resolution>>,
    pub can_be_downloaded: Option<bool>,
    pub min_age_restriction: Option<u8>,
}

impl NewVideo {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            available_resolutions: None,
            can_be_downloaded: None,
            min_age_restriction: None,
        }
    }
}

/// Validated partial update; `None` leaves the stored field unchanged
///
/// `min_age_restriction` is doubly optional: `Some(None)` clears the restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub available_resolutions: Option<Vec<Resolution>>,
    pub can_be_downloaded: Option<bool>,
    pub min_age_restriction: Option<Option<u8>>,
    pub publication_date: Option<DateTime<Utc>>,
}

impl VideoChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrite every field that is present
    pub fn apply_to(self, video: &mut VideoRecord) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(author) = self.author {
            video.author = author;
        }
        if let Some(resolutions) = self.available_resolutions {
            video.available_resolutions = resolutions;
        }
        if let Some(can_be_downloaded) = self.can_be_downloaded {
            video.can_be_downloaded = can_be_downloaded;
        }
        if let Some(min_age_restriction) = self.min_age_restriction {
            video.min_age_restriction = min_age_restriction;
        }
        if let Some(publication_date) = self.publication_date {
            video.publication_date = publication_date;
        }
    }
}

/// Timestamps as `2026-10-17T09:30:00.000Z`
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> VideoRecord {
        let created = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        VideoRecord {
            id: 1,
            title: "Intro".to_string(),
            author: "Ann".to_string(),
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at: created,
            publication_date: created + chrono::Duration::days(1),
            available_resolutions: vec![Resolution::P720],
        }
    }

    #[test]
    fn test_record_serializes_camel_case_with_millis() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "Intro",
                "author": "Ann",
                "canBeDownloaded": false,
                "minAgeRestriction": null,
                "createdAt": "2026-10-17T09:30:00.000Z",
                "publicationDate": "2026-10-18T09:30:00.000Z",
                "availableResolutions": ["P720"]
            })
        );
    }

    #[test]
    fn test_apply_changes_only_touches_present_fields() {
        let mut video = sample();
        let changes = VideoChanges {
            can_be_downloaded: Some(true),
            ..Default::default()
        };
        changes.apply_to(&mut video);

        let mut expected = sample();
        expected.can_be_downloaded = true;
        assert_eq!(video, expected);
    }

    #[test]
    fn test_apply_changes_can_clear_age_restriction() {
        let mut video = sample();
        video.min_age_restriction = Some(16);
        VideoChanges {
            min_age_restriction: Some(None),
            ..Default::default()
        }
        .apply_to(&mut video);
        assert_eq!(video.min_age_restriction, None);
    }
}

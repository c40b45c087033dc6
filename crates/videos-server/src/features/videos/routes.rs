//! Video API routes
//!
//! Wires the video commands and queries to axum handlers.
//!
//! # Route Structure
//!
//! - `GET /videos` - List every video
//! - `GET /videos/:id` - Get a single video
//! - `POST /videos` - Create a video
//! - `PUT /videos/:id` - Partially update a video
//! - `DELETE /videos/:id` - Delete a video
//!
//! Ids that are not unsigned integers cannot name a stored video and are
//! answered with `404 Not Found`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::{
    commands::{
        CreateVideoCommand, CreateVideoError, DeleteVideoCommand, DeleteVideoError,
        UpdateVideoCommand, UpdateVideoError,
    },
    queries::{GetVideoError, GetVideoQuery, ListVideosQuery},
    types::{FieldError, ValidationErrors, VideoPayload},
};
use crate::store::VideoStore;

/// Field name reported when the request body is not a JSON object
pub const BODY_FIELD: &str = "body";

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the videos router
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/hometask_01/api/videos", videos_routes())
///     .with_state(Arc::new(VideoStore::new()));
/// ```
pub fn videos_routes() -> Router<Arc<VideoStore>> {
    Router::new()
        .route("/", get(list_videos).post(create_video))
        .route("/:id", get(get_video).put(update_video).delete(delete_video))
}

/// Parse a path segment as a video id
pub fn parse_video_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

fn require_id(raw: &str) -> Result<u64, VideoApiError> {
    parse_video_id(raw).ok_or_else(|| VideoApiError::InvalidId(raw.to_string()))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /videos`
///
/// - `201 Created` with the stored record
/// - `400 Bad Request` with `{"errorsMessages": [...]}`
#[tracing::instrument(skip(store, body))]
async fn create_video(
    State(store): State<Arc<VideoStore>>,
    body: Result<Json<VideoPayload>, JsonRejection>,
) -> Result<Response, VideoApiError> {
    let Json(payload) = body?;

    let video = super::commands::create::handle(&store, CreateVideoCommand { payload })?;

    Ok((StatusCode::CREATED, Json(video)).into_response())
}

/// `PUT /videos/:id`
///
/// - `200 OK` with the updated record
/// - `404 Not Found` for unknown ids, whatever the body
/// - `400 Bad Request` with `{"errorsMessages": [...]}`
#[tracing::instrument(skip(store, body))]
async fn update_video(
    State(store): State<Arc<VideoStore>>,
    Path(id): Path<String>,
    body: Result<Json<VideoPayload>, JsonRejection>,
) -> Result<Response, VideoApiError> {
    let id = require_id(&id)?;

    let Json(payload) = body.map_err(|rejection| {
        if store.contains(id) {
            VideoApiError::InvalidBody(rejection)
        } else {
            VideoApiError::Update(UpdateVideoError::NotFound(id))
        }
    })?;

    let video = super::commands::update::handle(&store, UpdateVideoCommand { id, payload })?;

    Ok((StatusCode::OK, Json(video)).into_response())
}

/// `DELETE /videos/:id`
///
/// - `204 No Content`
/// - `404 Not Found`
#[tracing::instrument(skip(store))]
async fn delete_video(
    State(store): State<Arc<VideoStore>>,
    Path(id): Path<String>,
) -> Result<Response, VideoApiError> {
    let id = require_id(&id)?;

    super::commands::delete::handle(&store, DeleteVideoCommand { id })?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// `GET /videos`
#[tracing::instrument(skip(store))]
async fn list_videos(State(store): State<Arc<VideoStore>>) -> Response {
    let videos = super::queries::list::handle(&store, ListVideosQuery);
    (StatusCode::OK, Json(videos)).into_response()
}

/// `GET /videos/:id`
///
/// - `200 OK` with the record
/// - `404 Not Found`
#[tracing::instrument(skip(store))]
async fn get_video(
    State(store): State<Arc<VideoStore>>,
    Path(id): Path<String>,
) -> Result<Response, VideoApiError> {
    let id = require_id(&id)?;

    let video = super::queries::get::handle(&store, GetVideoQuery { id })?;

    Ok((StatusCode::OK, Json(video)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for video API endpoints
#[derive(Debug, thiserror::Error)]
pub enum VideoApiError {
    #[error("'{0}' is not a video id")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Create(#[from] CreateVideoError),

    #[error(transparent)]
    Update(#[from] UpdateVideoError),

    #[error(transparent)]
    Delete(#[from] DeleteVideoError),

    #[error(transparent)]
    Get(#[from] GetVideoError),
}

impl IntoResponse for VideoApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreateVideoError::Validation(errors))
            | Self::Update(UpdateVideoError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            },
            Self::InvalidBody(rejection) => {
                tracing::warn!(error = %rejection, "Request body rejected");
                let errors = ValidationErrors {
                    errors: vec![FieldError::new(BODY_FIELD, rejection.body_text())],
                };
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            },
            Self::InvalidId(_)
            | Self::Update(UpdateVideoError::NotFound(_))
            | Self::Delete(DeleteVideoError::NotFound(_))
            | Self::Get(GetVideoError::NotFound(_)) => {
                tracing::debug!(error = %self, "Video not found");
                StatusCode::NOT_FOUND.into_response()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_video_id() {
        assert_eq!(parse_video_id("17"), Some(17));
        assert_eq!(parse_video_id("abc"), None);
        assert_eq!(parse_video_id("-1"), None);
        assert_eq!(parse_video_id("1.5"), None);
        assert_eq!(parse_video_id(""), None);
    }

    #[test]
    fn test_error_display() {
        let err = VideoApiError::from(DeleteVideoError::NotFound(4));
        assert_eq!(err.to_string(), "Video with id 4 not found");
    }

    #[test]
    fn test_not_found_has_empty_body() {
        let response = VideoApiError::InvalidId("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

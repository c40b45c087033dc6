//! Testing routes
//!
//! - `DELETE /testing/all-data` - Remove every video

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::delete, Router};

use super::commands::ResetAllDataCommand;
use crate::store::VideoStore;

pub fn testing_routes() -> Router<Arc<VideoStore>> {
    Router::new().route("/all-data", delete(reset_all_data))
}

/// Always `204 No Content`
#[tracing::instrument(skip(store))]
async fn reset_all_data(State(store): State<Arc<VideoStore>>) -> StatusCode {
    super::commands::reset::handle(&store, ResetAllDataCommand);
    StatusCode::NO_CONTENT
}

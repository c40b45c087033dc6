//! Feature modules implementing the video API
//!
//! Each feature is a vertical slice with its own commands, queries and routes.
//!
//! # Features
//!
//! - **videos**: Video CRUD and payload validation
//! - **testing**: Store reset for end-to-end suites
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions
//! - `types.rs` - Shared types (if needed)
//!
//! Handlers are plain functions taking the store and a command or query, so
//! they can be tested without going through HTTP.

pub mod shared;
pub mod testing;
pub mod videos;

use std::sync::Arc;

use axum::Router;

use crate::store::VideoStore;

/// Creates the API router with all feature routes mounted
///
/// - `/videos` - Video CRUD
/// - `/testing` - Test-support endpoints
pub fn router(store: Arc<VideoStore>) -> Router<()> {
    Router::new()
        .nest("/videos", videos::videos_routes().with_state(store.clone()))
        .nest("/testing", testing::testing_routes().with_state(store))
}

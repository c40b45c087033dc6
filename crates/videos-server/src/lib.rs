//! Videos Server Library
//!
//! HTTP server for an in-memory collection of video metadata.
//!
//! # Overview
//!
//! - **Validation**: Field rules for create and update payloads
//!   ([`features::videos::validation`])
//! - **Store**: Ordered, lock-protected collection with counter ids
//!   ([`store::VideoStore`])
//! - **API Endpoints**: CRUD routes plus a reset endpoint for test suites
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS and request logging
//!
//! # Architecture
//!
//! Each feature is a vertical slice of commands (writes) and queries (reads):
//!
//! - **Commands**: create, update, delete, reset. Write paths run the
//!   validator before touching the store, and a rejected payload is never
//!   partially applied.
//! - **Queries**: list and get.
//!
//! Routes extract the id or payload, call the slice handler and map its
//! error enum to a status code.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use videos_server::{api, config::Config, store::VideoStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(&config, Arc::new(VideoStore::new())).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use error::{AppError, ServerResult};
pub use models::{NewVideo, VideoChanges, VideoRecord};
pub use store::{StoreError, VideoStore};

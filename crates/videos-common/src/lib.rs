//! Videos Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging setup, and error handling for the videos workspace.
//!
//! # Overview
//!
//! - **Error Handling**: `CommonError` and the crate `Result` alias
//! - **Logging**: `tracing` subscriber configuration driven by environment variables
//! - **Types**: the resolution enum and the tri-state `Presence` wrapper used by payloads
//!
//! # Example
//!
//! ```no_run
//! use videos_common::logging::{init_logging, LogConfig};
//! use videos_common::types::Resolution;
//!
//! fn main() -> videos_common::Result<()> {
//!     let _guard = init_logging(&LogConfig::from_env()?)?;
//!     tracing::info!(allowed = %Resolution::allowed_list(), "Logging ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{CommonError, Result};

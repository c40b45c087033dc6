//! Test-support endpoints
//!
//! Lets end-to-end suites wipe the store between runs.

pub mod commands;
pub mod routes;

pub use commands::ResetAllDataCommand;
pub use routes::testing_routes;

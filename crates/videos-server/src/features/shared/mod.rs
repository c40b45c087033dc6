//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **validation**: Field-agnostic input checks
//! - **test_helpers**: Test fixtures and utilities (test-only)

pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{parse_timestamp, validate_integer_range, validate_timestamp, validate_trimmed_text};

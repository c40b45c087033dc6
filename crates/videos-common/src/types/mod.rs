//! Common types used across the videos workspace

mod presence;
mod resolution;

pub use presence::Presence;
pub use resolution::Resolution;

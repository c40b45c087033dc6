pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateVideoCommand, CreateVideoError};
pub use delete::{DeleteVideoCommand, DeleteVideoError};
pub use update::{UpdateVideoCommand, UpdateVideoError};

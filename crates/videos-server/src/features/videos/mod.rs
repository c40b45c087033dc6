pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;
pub mod validation;


pub use commands::{
    CreateVideoCommand, CreateVideoError, DeleteVideoCommand, DeleteVideoError,
    UpdateVideoCommand, UpdateVideoError,
};

pub use queries::{GetVideoError, GetVideoQuery, ListVideosQuery};

pub use routes::videos_routes;
pub use types::{FieldError, ValidationErrors, ValidationMode, VideoPayload};
pub use validation::{check, check_create, check_update, validate};

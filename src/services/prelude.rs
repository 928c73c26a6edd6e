pub use crate::db::{Folder, NewNote, Note, NoteFilter, NoteUpdate, SqliteRepository, Tag};
pub use crate::error::AppError;
pub use axum::extract::State;
pub use axum::response::{IntoResponse, Response};
pub use axum::Json;
pub use http::StatusCode;
pub use serde::Deserialize;
pub use tracing::{debug, info};

//! Notes, folders and tags behind a REST API, stored in SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod hydrate;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::{router, AppState};

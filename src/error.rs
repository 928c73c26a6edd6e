//! Error taxonomy for the HTTP surface.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use thiserror::Error;
use tracing::error;

use crate::db::Lookup;
use crate::services::not_found;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request input.
    #[error("{0}")]
    Validation(String),
    #[error("Not Found")]
    NotFound,
    #[error("store error: {0}")]
    Store(sqlx::Error),
}

impl AppError {
    pub fn missing_field(field: &str) -> Self {
        AppError::Validation(format!("Missing `{}` in request body", field))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::Validation("Referenced folder or tag does not exist".to_string())
            }
            _ => AppError::Store(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "message": message })),
            )
                .into_response(),
            AppError::NotFound => not_found().into_response(),
            AppError::Store(err) => {
                error!(error = %err, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "message": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

impl<T> Lookup<T> {
    /// Converts a miss into [`AppError::NotFound`].
    pub fn or_not_found(self) -> Result<T, AppError> {
        self.into_option().ok_or(AppError::NotFound)
    }
}

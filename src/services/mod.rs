//! HTTP surface: shared state, extractors and the router.

mod folders;
mod notes;
mod prelude;
mod tags;

use crate::services::prelude::*;
use axum::extract::{FromRequest, FromRequestParts};
use axum::routing::get;
use axum::Router;
use http::header;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// State handed to every handler. The repository wraps a pooled connection
/// handle, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub repo: SqliteRepository,
}

impl AppState {
    pub fn new(repo: SqliteRepository) -> Self {
        Self { repo }
    }
}

/// `Json` whose rejections become [`AppError::Validation`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `Query` whose rejections become [`AppError::Validation`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// `Path` whose rejections become [`AppError::Validation`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);

/// Body shared by the folder and tag write endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct NameInput {
    pub name: Option<String>,
}

impl NameInput {
    pub fn into_name(self) -> Result<String, AppError> {
        match self.name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(AppError::missing_field("name")),
        }
    }
}

/// 201 with a `Location` header pointing at the new resource.
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

/// The single place a 404 body is produced, for unknown routes and missing
/// entities alike.
pub fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Not Found" })),
    )
}

async fn fallback() -> impl IntoResponse {
    not_found()
}

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/:id",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route(
            "/folders",
            get(folders::get_folders).post(folders::create_folder),
        )
        .route(
            "/folders/:id",
            get(folders::get_folder)
                .put(folders::rename_folder)
                .delete(folders::delete_folder),
        )
        .route("/tags", get(tags::get_tags).post(tags::create_tag))
        .route(
            "/tags/:id",
            get(tags::get_tag)
                .put(tags::rename_tag)
                .delete(tags::delete_tag),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

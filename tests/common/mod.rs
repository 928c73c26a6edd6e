#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, HeaderMap, Request, StatusCode};
use notes_api::db::{init_memory_db, SqliteRepository};
use notes_api::{router, AppState};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn test_repo() -> SqliteRepository {
    let pool = init_memory_db().await.expect("in-memory database");
    SqliteRepository::new(pool)
}

pub async fn test_app() -> (Router, SqliteRepository) {
    let repo = test_repo().await;
    (router(AppState::new(repo.clone())), repo)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, raw: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    TestResponse {
        status,
        headers,
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    }
}

/// Creates a folder and two tags: returns (folder_id, [tag_ids]).
pub async fn seed(repo: &SqliteRepository) -> (i64, Vec<i64>) {
    let folder = repo.create_folder("Work").await.expect("folder");
    let urgent = repo.create_tag("urgent").await.expect("tag");
    let later = repo.create_tag("later").await.expect("tag");
    (folder.id, vec![urgent.id, later.id])
}

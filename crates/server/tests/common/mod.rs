#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

pub async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.expect("open in-memory sqlite");
    migration::Migrator::up(&db, None).await.expect("migrate up");
    db
}

/// Production router over a fresh in-memory database
pub async fn test_app() -> Router {
    server::startup::build_app(test_db().await)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.expect("router is infallible")
}

pub fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn form(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec()
}

/// POST `body` to `collection` and return the id from the Location header.
pub async fn create(app: &Router, collection: &str, body: &Value) -> i64 {
    let resp = send(app, json("POST", collection, body)).await;
    assert_eq!(resp.status(), 201, "create failed");
    let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
    let id = location
        .strip_prefix(&format!("{collection}/"))
        .unwrap_or_else(|| panic!("unexpected Location: {location}"));
    id.parse().unwrap()
}

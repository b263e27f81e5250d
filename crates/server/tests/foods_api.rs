mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset};
use serde_json::{json, Value};
use service::food::repository::mock::MockFoodRepository;
use service::inventory::repository::mock::MockInventoryRepository;

use common::{body_bytes, body_json, create, empty, form, json, send, test_app};

fn milk() -> Value {
    json!({"name": "Milk", "quantity": 2.0, "unit": "l"})
}

fn timestamp(v: &Value) -> DateTime<FixedOffset> {
    serde_json::from_value(v.clone()).expect("RFC 3339 timestamp")
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app().await;
    let resp = send(&app, empty("GET", "/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn get_unknown_food_returns_404_envelope() {
    let app = test_app().await;
    let resp = send(&app, empty("GET", "/foods/41")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert!(body["message"].as_str().unwrap().contains("41"));
}

#[tokio::test]
async fn non_numeric_path_id_is_bad_request() {
    let app = test_app().await;
    for method in ["GET", "DELETE"] {
        let resp = send(&app, empty(method, "/foods/abc")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "id must be a number");
    }
}

#[tokio::test]
async fn create_then_get_round_trips_fields() {
    let app = test_app().await;

    let resp = send(&app, json("POST", "/foods", &milk())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(resp.headers().contains_key("location"));
    assert!(body_bytes(resp).await.is_empty());

    let id = create(&app, "/foods", &json!({"name": "Eggs", "quantity": 12, "unit": "pcs"})).await;
    let resp = send(&app, empty("GET", &format!("/foods/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Eggs");
    assert_eq!(body["quantity"], 12.0);
    assert_eq!(body["unit"], "pcs");
    assert!(!body["createDate"].is_null());
    assert_eq!(timestamp(&body["createDate"]), timestamp(&body["updateDate"]));
}

#[tokio::test]
async fn client_supplied_id_and_timestamps_are_ignored() {
    let app = test_app().await;
    let id = create(
        &app,
        "/foods",
        &json!({"id": 500, "name": "Butter", "createDate": "1999-01-01T00:00:00Z", "updateDate": "1999-01-01T00:00:00Z"}),
    )
    .await;
    assert_ne!(id, 500);
    let body = body_json(send(&app, empty("GET", &format!("/foods/{id}"))).await).await;
    assert!(timestamp(&body["createDate"]).timestamp() > 946_684_800);
}

#[tokio::test]
async fn list_returns_all_foods() {
    let app = test_app().await;
    let resp = send(&app, empty("GET", "/foods")).await;
    assert_eq!(body_json(resp).await, json!([]));

    let a = create(&app, "/foods", &milk()).await;
    let b = create(&app, "/foods", &json!({"name": "Cheese"})).await;
    let body = body_json(send(&app, empty("GET", "/foods")).await).await;
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|f| f["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![a, b]);
}

#[tokio::test]
async fn put_preserves_create_date_and_advances_update_date() {
    let app = test_app().await;
    let id = create(&app, "/foods", &milk()).await;
    let before = body_json(send(&app, empty("GET", &format!("/foods/{id}"))).await).await;

    tokio::time::sleep(Duration::from_millis(5)).await;
    let resp = send(&app, json("PUT", &format!("/foods/{id}"), &json!({"name": "Milk", "quantity": 0.5, "unit": "l"}))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());

    let after = body_json(send(&app, empty("GET", &format!("/foods/{id}"))).await).await;
    assert_eq!(after["quantity"], 0.5);
    assert_eq!(timestamp(&after["createDate"]), timestamp(&before["createDate"]));
    assert!(timestamp(&after["updateDate"]) > timestamp(&before["updateDate"]));
}

#[tokio::test]
async fn put_unknown_id_is_404_and_mutates_nothing() {
    let app = test_app().await;
    let id = create(&app, "/foods", &milk()).await;
    let before = body_json(send(&app, empty("GET", "/foods")).await).await;

    let resp = send(&app, json("PUT", &format!("/foods/{}", id + 1), &json!({"name": "Ghost"}))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["status"], 404);

    let after = body_json(send(&app, empty("GET", "/foods")).await).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn invalid_payloads_are_bad_request() {
    let app = test_app().await;

    let resp = send(&app, json("POST", "/foods", &json!({"name": "  "}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["status"], 400);

    let resp = send(&app, json("POST", "/foods", &json!({"quantity": 1}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(&app, json("POST", "/foods", &json!({"name": "Jam", "quantity": -3}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let malformed = axum::http::Request::builder()
        .method("POST")
        .uri("/foods")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let resp = send(&app, malformed).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["status"], 400);

    assert_eq!(body_json(send(&app, empty("GET", "/foods")).await).await, json!([]));
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = test_app().await;
    let id = create(&app, "/foods", &milk()).await;

    let resp = send(&app, empty("DELETE", &format!("/foods/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, empty("GET", &format!("/foods/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, empty("DELETE", &format!("/foods/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["status"], 404);
}

#[tokio::test]
async fn bulk_delete_with_non_numeric_token_deletes_nothing() {
    let app = test_app().await;
    let a = create(&app, "/foods", &milk()).await;
    let b = create(&app, "/foods", &milk()).await;

    let resp = send(&app, form("DELETE", "/foods", &format!("ids={a}%2C{b}%2Cabc"))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "ids must be a number");

    for id in [a, b] {
        let resp = send(&app, empty("GET", &format!("/foods/{id}"))).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn bulk_delete_with_blank_or_missing_ids_is_bad_request() {
    let app = test_app().await;
    let id = create(&app, "/foods", &milk()).await;

    for req in [form("DELETE", "/foods", "ids="), form("DELETE", "/foods", "ids=+++"), empty("DELETE", "/foods")] {
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["message"], "ids must not be blank");
    }
    assert_eq!(send(&app, empty("GET", &format!("/foods/{id}"))).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn bulk_delete_with_unknown_id_is_404_and_deletes_nothing() {
    let app = test_app().await;
    let a = create(&app, "/foods", &milk()).await;
    let b = create(&app, "/foods", &milk()).await;

    let resp = send(&app, form("DELETE", "/foods", &format!("ids={a},{},{b}", b + 10))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(send(&app, empty("GET", "/foods")).await).await.as_array().unwrap().len(), 2);

    let resp = send(&app, form("DELETE", "/foods", &format!("ids={a},{b}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_json(send(&app, empty("GET", "/foods")).await).await, json!([]));
}

#[tokio::test]
async fn bulk_delete_accepts_query_string() {
    let app = test_app().await;
    let a = create(&app, "/foods", &milk()).await;
    let resp = send(&app, empty("DELETE", &format!("/foods?ids={a}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(send(&app, empty("GET", &format!("/foods/{a}"))).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_failure_is_500_without_detail() {
    let state = server::state::AppState::new(
        Arc::new(MockFoodRepository::unavailable()),
        Arc::new(MockInventoryRepository::default()),
    );
    let app = server::routes::build_router(state, tower_http::cors::CorsLayer::very_permissive());

    let resp = send(&app, empty("GET", "/foods")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["message"], "internal server error");

    let resp = send(&app, empty("GET", "/inventories")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn bulk_delete_accepts_mixed_case_form_content_type() {
    let app = test_app().await;
    let a = create(&app, "/foods", &milk()).await;
    let req = axum::http::Request::builder()
        .method("DELETE")
        .uri("/foods")
        .header("content-type", "Application/X-WWW-Form-Urlencoded; Charset=UTF-8")
        .body(axum::body::Body::from(format!("ids={a}")))
        .unwrap();
    let resp = send(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(send(&app, empty("GET", &format!("/foods/{a}"))).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_delete_ignores_trailing_comma() {
    let app = test_app().await;
    let a = create(&app, "/foods", &milk()).await;
    let b = create(&app, "/foods", &milk()).await;
    let resp = send(&app, form("DELETE", "/foods", &format!("ids={a},{b},"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_json(send(&app, empty("GET", "/foods")).await).await, json!([]));
}

//! Order creation validation: missing or mistyped body fields are a 422 and
//! nothing is written (the client here is never connected).

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use clementine_integration_tests::{body_json, offline_router};

async fn post_json(body: &str) -> axum::response::Response {
    let router = offline_router().await;
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn empty_body_is_a_422() {
    let response = post_json("").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation failed");
    assert_eq!(body["field"], "body");
}

#[tokio::test]
async fn malformed_json_is_a_422() {
    let response = post_json("{not json").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_total_amount_is_a_422() {
    let response = post_json(
        r#"{
            "items": [{"productId": "abc", "boughtQuantity": 2}],
            "user_address": {"city": "Pune", "country": "India", "zip_code": "411001"}
        }"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_user_address_is_a_422() {
    let response = post_json(
        r#"{
            "items": [{"productId": "abc", "boughtQuantity": 2}],
            "total_amount": 19.99
        }"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn mistyped_quantity_is_a_422() {
    let response = post_json(
        r#"{
            "items": [{"productId": "abc", "boughtQuantity": "two"}],
            "total_amount": 19.99,
            "user_address": {"city": "Pune", "country": "India", "zip_code": "411001"}
        }"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

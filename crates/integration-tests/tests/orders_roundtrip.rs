//! End-to-end order recording against a live MongoDB.
//!
//! Gated on `CLEMENTINE_TEST_MONGODB_URL`.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, Duration, Utc};
use tower::ServiceExt;

use clementine_api::db::OrderRepository;
use clementine_api::models::order::{CreateOrder, Item, UserAddress};
use clementine_core::{OrderId, ProductId};
use clementine_integration_tests::{LiveContext, body_json};

fn order_body() -> &'static str {
    r#"{
        "items": [{"productId": "abc", "boughtQuantity": 2}],
        "total_amount": 19.99,
        "user_address": {"city": "Pune", "country": "India", "zip_code": "411001"}
    }"#
}

// Scenario C: a valid order is echoed back with a server-assigned createdOn.
#[tokio::test]
async fn created_order_is_echoed_with_timestamp() {
    let Some(ctx) = LiveContext::connect().await else {
        eprintln!("skipping: CLEMENTINE_TEST_MONGODB_URL not set");
        return;
    };

    let start = Utc::now();
    let response = ctx
        .router(false)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(order_body()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["items"][0]["productId"], "abc");
    assert_eq!(body["items"][0]["boughtQuantity"], 2);
    assert_eq!(body["user_address"]["city"], "Pune");
    assert_eq!(body["user_address"]["zip_code"], "411001");

    let created_on: DateTime<Utc> = body["createdOn"].as_str().unwrap().parse().unwrap();
    // BSON datetimes carry millisecond precision; allow for the truncation.
    assert!(created_on >= start - Duration::milliseconds(5));

    ctx.teardown().await;
}

#[tokio::test]
async fn numeric_product_ids_are_stored_as_strings() {
    let Some(ctx) = LiveContext::connect().await else {
        eprintln!("skipping: CLEMENTINE_TEST_MONGODB_URL not set");
        return;
    };

    let response = ctx
        .router(false)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{
                        "items": [{"productId": 42, "boughtQuantity": 1}],
                        "total_amount": 5.0,
                        "user_address": {"city": "Pune", "country": "India", "zip_code": "411001"}
                    }"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["items"][0]["productId"], "42");

    ctx.teardown().await;
}

// The repository-level round trip: create, fetch back by id, compare.
#[tokio::test]
async fn stored_order_round_trips_by_id() {
    let Some(ctx) = LiveContext::connect().await else {
        eprintln!("skipping: CLEMENTINE_TEST_MONGODB_URL not set");
        return;
    };

    let repository = OrderRepository::new(&ctx.database);
    let new_order = CreateOrder {
        items: vec![Item {
            product_id: ProductId::new("abc"),
            bought_quantity: 2,
        }],
        total_amount: 19.99,
        user_address: UserAddress {
            city: "Pune".to_string(),
            country: "India".to_string(),
            zip_code: "411001".to_string(),
        },
    };

    let start = bson::DateTime::now();
    let (id, stored) = repository.create(new_order).await.unwrap();

    let found = repository.find(&id).await.unwrap().expect("order stored");
    assert_eq!(found.items, stored.items);
    assert_eq!(found.user_address, stored.user_address);
    assert!((found.total_amount - stored.total_amount).abs() < f64::EPSILON);
    assert!(found.created_on >= start);

    ctx.teardown().await;
}

#[tokio::test]
async fn unknown_and_malformed_ids_resolve_to_none() {
    let Some(ctx) = LiveContext::connect().await else {
        eprintln!("skipping: CLEMENTINE_TEST_MONGODB_URL not set");
        return;
    };

    let repository = OrderRepository::new(&ctx.database);

    let unknown = OrderId::new(bson::oid::ObjectId::new().to_hex());
    assert!(repository.find(&unknown).await.unwrap().is_none());

    let malformed = OrderId::new("not-an-object-id");
    assert!(repository.find(&malformed).await.unwrap().is_none());

    ctx.teardown().await;
}

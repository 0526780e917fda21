//! Order creation handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::models::order::{CreateOrder, Item, Order, UserAddress};
use crate::state::AppState;

/// The stored order as returned to the client.
///
/// Same shape as the stored document, with `createdOn` rendered as an
/// RFC 3339 timestamp instead of a BSON datetime.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(rename = "createdOn")]
    pub created_on: DateTime<Utc>,
    pub total_amount: f64,
    pub user_address: UserAddress,
    pub items: Vec<Item>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            created_on: order.created_on.to_chrono(),
            total_amount: order.total_amount,
            user_address: order.user_address,
            items: order.items,
        }
    }
}

/// Record a new order.
///
/// The payload is validated by deserialization (all fields required, item
/// `productId`s coerced to strings), stamped with the current time, and
/// appended as-is. The stored order is echoed back.
///
/// # Errors
///
/// 422 when the body is missing, malformed, or has missing/mistyped fields.
/// Storage faults surface as 500.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateOrder>, JsonRejection>,
) -> Result<Json<OrderResponse>> {
    let Json(new_order) =
        payload.map_err(|rejection| AppError::validation("body", rejection.body_text()))?;

    let (id, order) = OrderRepository::new(state.database())
        .create(new_order)
        .await?;
    tracing::info!(order_id = %id, "order recorded");

    Ok(Json(OrderResponse::from(order)))
}

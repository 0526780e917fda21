//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (pings storage)
//!
//! GET  /products      - Paginated catalog listing with optional price bounds
//! POST /orders        - Record an order
//! ```

pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/orders", post(orders::create))
}

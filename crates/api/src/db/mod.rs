//! Database operations for the `cc-ecommerce-db` MongoDB database.
//!
//! # Collections
//!
//! - `products` - Catalog documents with a numeric `price`; read-only here
//! - `orders` - Append-only order documents
//!
//! The client is constructed once at startup by [`connect`] and handed to
//! repositories through [`crate::state::AppState`]; connection establishment
//! itself is lazy and surfaces on first use (or via `GET /health/ready`).

use std::time::Duration;

use mongodb::{Client, options::ClientOptions};
use secrecy::ExposeSecret;
use thiserror::Error;

pub mod orders;
pub mod products;

pub use orders::OrderRepository;
pub use products::ProductRepository;

/// Name of the catalog collection.
pub const PRODUCTS: &str = "products";

/// Name of the orders collection.
pub const ORDERS: &str = "orders";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a MongoDB client with sensible defaults.
///
/// # Arguments
///
/// * `mongodb_url` - MongoDB connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the connection string cannot be parsed.
pub async fn connect(
    mongodb_url: &secrecy::SecretString,
) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(mongodb_url.expose_secret()).await?;
    options.app_name = Some("clementine-api".to_string());
    options.server_selection_timeout = Some(Duration::from_secs(10));
    Client::with_options(options)
}

//! Integration tests for Clementine.
//!
//! # Running Tests
//!
//! ```bash
//! # Validation tests need no database:
//! cargo test -p clementine-integration-tests
//!
//! # End-to-end scenarios need a reachable MongoDB:
//! CLEMENTINE_TEST_MONGODB_URL=mongodb://127.0.0.1:27017 \
//!     cargo test -p clementine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - Validation tests drive the router in-process via `tower::ServiceExt`.
//!   The storage client is created but never connected (connection
//!   establishment is lazy), which is enough for every request that fails
//!   validation before reaching storage.
//! - End-to-end tests are gated on `CLEMENTINE_TEST_MONGODB_URL`; when it is
//!   unset they skip. Each test works in a throwaway database that is
//!   dropped on teardown, so tests can run concurrently.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use bson::oid::ObjectId;
use mongodb::{Client, Database};
use secrecy::SecretString;

use clementine_api::config::{ApiConfig, CatalogConfig};
use clementine_api::db;
use clementine_api::routes;
use clementine_api::state::AppState;

/// Environment variable naming the MongoDB deployment for end-to-end tests.
pub const TEST_MONGODB_URL: &str = "CLEMENTINE_TEST_MONGODB_URL";

/// Build a config pointing at the given deployment.
#[must_use]
pub fn test_config(mongodb_url: &str, database: &str, paginate_filtered: bool) -> ApiConfig {
    ApiConfig {
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
        mongodb_url: SecretString::from(mongodb_url),
        database: database.to_string(),
        catalog: CatalogConfig { paginate_filtered },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Build the API router over the given database handle.
#[must_use]
pub fn test_router(config: ApiConfig, database: Database) -> Router {
    routes::routes().with_state(AppState::new(config, database))
}

/// A router whose storage client is never connected.
///
/// # Panics
///
/// Panics if the (hard-coded, valid) connection string fails to parse.
pub async fn offline_router() -> Router {
    let config = test_config("mongodb://127.0.0.1:27017", "clementine-test", false);
    let client = db::connect(&config.mongodb_url)
        .await
        .expect("connection string should parse");
    let database = client.database(&config.database);
    test_router(config, database)
}

/// Read a response body into JSON.
///
/// # Panics
///
/// Panics if the body cannot be read or is not JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Connection to the live test deployment, scoped to a throwaway database.
pub struct LiveContext {
    pub client: Client,
    pub database: Database,
    mongodb_url: String,
}

impl LiveContext {
    /// Connect if the gate variable is set; `None` means "skip this test".
    ///
    /// # Panics
    ///
    /// Panics if the configured connection string fails to parse.
    pub async fn connect() -> Option<Self> {
        let mongodb_url = std::env::var(TEST_MONGODB_URL).ok()?;

        let client = db::connect(&SecretString::from(mongodb_url.clone()))
            .await
            .expect("test connection string should parse");
        let name = format!("clementine-test-{}", ObjectId::new().to_hex());
        let database = client.database(&name);

        Some(Self {
            client,
            database,
            mongodb_url,
        })
    }

    /// Build the API router over this context's throwaway database.
    #[must_use]
    pub fn router(&self, paginate_filtered: bool) -> Router {
        let config = test_config(
            &self.mongodb_url,
            self.database.name(),
            paginate_filtered,
        );
        test_router(config, self.database.clone())
    }

    /// Drop the throwaway database and close the client.
    pub async fn teardown(self) {
        self.database.drop().await.ok();
        self.client.shutdown().await;
    }
}

//! CLI command implementations.

pub mod orders;
pub mod seed;

use secrecy::SecretString;

/// Storage settings shared by every command: connection string and database
/// name, read from the same environment variables the API uses.
pub struct StorageEnv {
    pub mongodb_url: SecretString,
    pub database: String,
}

impl StorageEnv {
    /// Load storage settings, falling back to the local defaults.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let mongodb_url = SecretString::from(
            std::env::var("MONGODB_URL")
                .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string()),
        );
        let database = std::env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "cc-ecommerce-db".to_string());

        Self {
            mongodb_url,
            database,
        }
    }
}

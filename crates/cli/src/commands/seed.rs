//! Seed the products collection with sample catalog data.
//!
//! Inserts generated products with a spread of prices so paginated and
//! filtered listings have something to chew on locally.

use bson::{Document, doc};
use tracing::info;

use clementine_api::db;

use super::StorageEnv;

const SAMPLE_NAMES: &[&str] = &[
    "Espresso Cup",
    "Pour-Over Kettle",
    "Burr Grinder",
    "Ceramic Dripper",
    "Milk Pitcher",
];

/// Insert `count` sample products.
///
/// # Errors
///
/// Returns an error if the storage client cannot be created or the insert
/// fails.
pub async fn products(count: u32) -> Result<(), Box<dyn std::error::Error>> {
    let env = StorageEnv::load();

    let client = db::connect(&env.mongodb_url).await?;
    let collection = client
        .database(&env.database)
        .collection::<Document>(db::PRODUCTS);

    info!(count, database = %env.database, "Seeding products");

    let documents: Vec<Document> = SAMPLE_NAMES
        .iter()
        .cycle()
        .zip(1..=count)
        .map(|(name, i)| {
            doc! {
                "name": format!("{name} #{i}"),
                "price": f64::from(i % 20) * 5.0 + 4.99,
                "category": "sample",
            }
        })
        .collect();

    let result = collection.insert_many(documents).await?;

    info!("Seeding complete!");
    info!("  Products inserted: {}", result.inserted_ids.len());

    client.shutdown().await;
    Ok(())
}

//! Inspect stored orders.

use tracing::info;

use clementine_api::db::{self, OrderRepository};
use clementine_core::OrderId;

use super::StorageEnv;

/// Fetch an order by its string-form id and print it.
///
/// # Errors
///
/// Returns an error if the storage client cannot be created or the query
/// fails. An unknown id is not an error; it prints a notice.
pub async fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let env = StorageEnv::load();

    let client = db::connect(&env.mongodb_url).await?;
    let repository = OrderRepository::new(&client.database(&env.database));

    match repository.find(&OrderId::new(id)).await? {
        Some(order) => {
            info!(
                created_on = %order.created_on,
                total_amount = order.total_amount,
                "Order found"
            );
            for item in &order.items {
                info!("  {} x{}", item.product_id, item.bought_quantity);
            }
            info!(
                "  Ship to: {}, {} {}",
                order.user_address.city, order.user_address.country, order.user_address.zip_code
            );
        }
        None => info!("No order with id {id}"),
    }

    client.shutdown().await;
    Ok(())
}

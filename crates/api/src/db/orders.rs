//! Order repository: append-only writes to the `orders` collection.

use bson::oid::ObjectId;
use bson::{Bson, doc};
use mongodb::{Collection, Database};
use tracing::instrument;

use clementine_core::OrderId;

use super::{ORDERS, RepositoryError};
use crate::models::order::{CreateOrder, Order};

/// Repository for order database operations.
pub struct OrderRepository {
    collection: Collection<Order>,
}

impl OrderRepository {
    /// Create a new order repository over the `orders` collection.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ORDERS),
        }
    }

    /// Stamp the creation time and append the order.
    ///
    /// Returns the id assigned by the database (in string form) together
    /// with the stored document. Concurrent creations are independent
    /// inserts; there is no duplicate detection or stock accounting.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, new_order))]
    pub async fn create(&self, new_order: CreateOrder) -> Result<(OrderId, Order), RepositoryError> {
        let order = Order {
            created_on: bson::DateTime::now(),
            total_amount: new_order.total_amount,
            user_address: new_order.user_address,
            items: new_order.items,
        };

        let result = self.collection.insert_one(&order).await?;
        let id = match result.inserted_id {
            Bson::ObjectId(oid) => OrderId::new(oid.to_hex()),
            other => OrderId::new(other.to_string()),
        };

        Ok((id, order))
    }

    /// Fetch an order back by its string-form id.
    ///
    /// An id that is not a valid `ObjectId` cannot name a stored order, so
    /// it resolves to `None` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn find(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        let Ok(oid) = ObjectId::parse_str(id.as_str()) else {
            return Ok(None);
        };

        Ok(self.collection.find_one(doc! { "_id": oid }).await?)
    }
}

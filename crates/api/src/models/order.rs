//! Order documents and the creation payload.
//!
//! Field names on the wire keep their historical spellings (`createdOn`,
//! `productId`, `boughtQuantity`) so existing clients and stored documents
//! stay compatible.

use serde::{Deserialize, Serialize};

use clementine_core::ProductId;

/// A line entry within an order.
///
/// `product_id` deserializes from a string or a number; either way it is an
/// opaque string from here on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(rename = "boughtQuantity")]
    pub bought_quantity: i64,
}

/// Shipping address attached to an order. Value object, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAddress {
    pub city: String,
    pub country: String,
    pub zip_code: String,
}

/// A stored order document.
///
/// `created_on` is assigned by the server at handling time and persisted as
/// a BSON datetime. Orders are never updated or deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "createdOn")]
    pub created_on: bson::DateTime,
    pub total_amount: f64,
    pub user_address: UserAddress,
    pub items: Vec<Item>,
}

/// Payload for creating an order. Every field is required; a missing or
/// mistyped field fails deserialization and never reaches storage.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub items: Vec<Item>,
    pub total_amount: f64,
    pub user_address: UserAddress,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn create_order_deserializes_string_product_ids() {
        let payload: CreateOrder = serde_json::from_str(
            r#"{
                "items": [{"productId": "abc", "boughtQuantity": 2}],
                "total_amount": 19.99,
                "user_address": {"city": "Pune", "country": "India", "zip_code": "411001"}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].product_id.as_str(), "abc");
        assert_eq!(payload.items[0].bought_quantity, 2);
    }

    #[test]
    fn create_order_coerces_numeric_product_ids() {
        let payload: CreateOrder = serde_json::from_str(
            r#"{
                "items": [{"productId": 42, "boughtQuantity": 1}],
                "total_amount": 5.0,
                "user_address": {"city": "Pune", "country": "India", "zip_code": "411001"}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.items[0].product_id.as_str(), "42");
    }

    #[test]
    fn create_order_requires_total_amount() {
        let result: Result<CreateOrder, _> = serde_json::from_str(
            r#"{
                "items": [],
                "user_address": {"city": "Pune", "country": "India", "zip_code": "411001"}
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_order_requires_complete_address() {
        let result: Result<CreateOrder, _> = serde_json::from_str(
            r#"{
                "items": [],
                "total_amount": 5.0,
                "user_address": {"city": "Pune", "country": "India"}
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_items_are_accepted() {
        // Field presence is the only validation; business rules are not.
        let payload: CreateOrder = serde_json::from_str(
            r#"{
                "items": [],
                "total_amount": 0.0,
                "user_address": {"city": "Pune", "country": "India", "zip_code": "411001"}
            }"#,
        )
        .unwrap();
        assert!(payload.items.is_empty());
    }

    #[test]
    fn order_round_trips_through_bson() {
        let order = Order {
            created_on: bson::DateTime::now(),
            total_amount: 19.99,
            user_address: UserAddress {
                city: "Pune".to_string(),
                country: "India".to_string(),
                zip_code: "411001".to_string(),
            },
            items: vec![Item {
                product_id: ProductId::new("abc"),
                bought_quantity: 2,
            }],
        };

        let document = bson::to_document(&order).unwrap();
        assert!(document.get_datetime("createdOn").is_ok());

        let back: Order = bson::from_document(document).unwrap();
        assert_eq!(back.items, order.items);
        assert_eq!(back.user_address, order.user_address);
        assert_eq!(back.created_on, order.created_on);
    }
}

//! Newtype IDs for type-safe entity references.
//!
//! Identifiers are opaque strings end-to-end. The storage layer may keep them
//! as `ObjectId`s, numbers, or strings; once they cross into this codebase
//! they are string-typed and never reinterpreted.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Macro to define a type-safe ID wrapper over an opaque string.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use clementine_core::define_id;
/// define_id!(CartId);
/// define_id!(SessionId);
///
/// let cart_id = CartId::new("abc123");
/// let session_id = SessionId::new("abc123");
///
/// // These are different types, so this won't compile:
/// // let _: CartId = session_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID, returning the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(OrderId);

/// Opaque product identifier.
///
/// Unlike the `define_id!` ids, deserialization coerces: clients send product
/// ids as JSON strings or numbers, and stored products may carry an
/// `ObjectId` `_id`. All of them deserialize to the string form, so a
/// `ProductId` compares equal regardless of how the source encoded it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ProductIdVisitor)
    }
}

struct ProductIdVisitor;

impl<'de> Visitor<'de> for ProductIdVisitor {
    type Value = ProductId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a product id as a string, a number, or an ObjectId")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ProductId(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ProductId(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ProductId(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ProductId(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ProductId(v.to_string()))
    }

    // BSON ObjectIds reach foreign visitors as a map of the shape
    // {"$oid": "<24 hex chars>"}.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut id = None;
        while let Some((key, value)) = map.next_entry::<String, String>()? {
            if key == "$oid" {
                id = Some(value);
            }
        }
        id.map(ProductId)
            .ok_or_else(|| de::Error::custom("expected an ObjectId map with an \"$oid\" entry"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn product_id_from_json_string() {
        let id: ProductId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn product_id_coerces_json_integer() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn product_id_coerces_negative_integer() {
        let id: ProductId = serde_json::from_str("-7").unwrap();
        assert_eq!(id.as_str(), "-7");
    }

    #[test]
    fn product_id_coerces_oid_map() {
        let id: ProductId =
            serde_json::from_str(r#"{"$oid":"65f1a2b3c4d5e6f708192a3b"}"#).unwrap();
        assert_eq!(id.as_str(), "65f1a2b3c4d5e6f708192a3b");
    }

    #[test]
    fn product_id_rejects_other_maps() {
        let result: Result<ProductId, _> = serde_json::from_str(r#"{"id":"abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn product_id_serializes_as_plain_string() {
        let id = ProductId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
    }

    #[test]
    fn order_id_round_trips() {
        let id = OrderId::new("65f1a2b3c4d5e6f708192a3b");
        let json = serde_json::to_string(&id).unwrap();
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}

//! Catalog documents and the listing response.

use bson::Document;
use serde::{Deserialize, Serialize};

use clementine_core::ProductId;

/// A product document from the catalog.
///
/// Only the identifier and `price` are interpreted; every other display
/// field is carried through untouched in `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub price: f64,
    #[serde(flatten)]
    pub details: Document,
}

/// Pagination metadata computed inside the aggregation.
///
/// An absent offset serializes as `null`: `next_offset` is null once
/// `offset + limit` reaches the total count, `prev_offset` is null at the
/// start of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(rename = "nextOffset")]
    pub next_offset: Option<i64>,
    #[serde(rename = "prevOffset")]
    pub prev_offset: Option<i64>,
}

/// One element of the `$facet` output: the metadata pipeline and the record
/// pipeline, side by side.
///
/// `page` is empty (not a zero count) when the collection has no matching
/// records, because `$count` emits nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFacet {
    pub page: Vec<PageMeta>,
    pub data: Vec<Product>,
}

/// Response body of `GET /products`: the raw combined facet result.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub result: Vec<ListFacet>,
}

//! Product repository: the catalog listing aggregation.
//!
//! A single `$facet` aggregation computes the page of products and the
//! pagination metadata in one round trip. The `page` pipeline counts every
//! matching record and projects `nextOffset`/`prevOffset` from the count; the
//! `data` pipeline selects the records themselves.

use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::instrument;

use clementine_core::{PageRequest, PriceFilter, PriceRange};

use super::{PRODUCTS, RepositoryError};
use crate::config::CatalogConfig;
use crate::models::product::ListFacet;

/// Repository for catalog read operations.
pub struct ProductRepository {
    collection: Collection<Document>,
}

impl ProductRepository {
    /// Create a new product repository over the `products` collection.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(PRODUCTS),
        }
    }

    /// Run the listing aggregation and return its facet documents.
    ///
    /// The result is the raw combined facet output: one element carrying the
    /// metadata (`page`) and record (`data`) pipelines. No post-processing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the aggregation fails and
    /// `RepositoryError::DataCorruption` if a facet document does not
    /// deserialize.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: PageRequest,
        prices: PriceRange,
        catalog: CatalogConfig,
    ) -> Result<Vec<ListFacet>, RepositoryError> {
        let pipeline = build_list_pipeline(page, prices, catalog.paginate_filtered);

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let mut facets = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            let facet = bson::from_document(document).map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid facet document: {e}"))
            })?;
            facets.push(facet);
        }

        Ok(facets)
    }
}

/// Build the listing aggregation pipeline.
///
/// `paginate_filtered` controls the filter/pagination interaction: by default
/// a price-filtered listing returns every matching record and ignores
/// offset/limit; when set, `$skip`/`$limit` are appended to the filtered
/// branch as well.
#[must_use]
pub fn build_list_pipeline(
    page: PageRequest,
    prices: PriceRange,
    paginate_filtered: bool,
) -> Vec<Document> {
    vec![doc! {
        "$facet": {
            "page": page_pipeline(page),
            "data": data_pipeline(page, prices, paginate_filtered),
        }
    }]
}

/// The metadata pipeline: count matching records, then derive the offsets.
///
/// `$count` emits nothing for an empty collection, so the facet yields an
/// empty `page` array rather than a zero count.
fn page_pipeline(page: PageRequest) -> Vec<Document> {
    let (offset, limit) = (page.offset(), page.limit());
    vec![
        doc! { "$count": "totalResults" },
        doc! {
            "$project": {
                "nextOffset": {
                    "$cond": [
                        { "$gte": [ { "$add": [offset, limit] }, "$totalResults" ] },
                        null,
                        { "$add": [offset, limit] },
                    ]
                },
                "prevOffset": {
                    "$cond": [
                        { "$lte": [offset, 0_i64] },
                        null,
                        { "$subtract": [offset, limit] },
                    ]
                },
            }
        },
    ]
}

/// The record pipeline: one price-filter branch, or skip/take when unbounded.
fn data_pipeline(page: PageRequest, prices: PriceRange, paginate_filtered: bool) -> Vec<Document> {
    let mut stages = Vec::new();

    match prices.classify() {
        Some(PriceFilter::Within { min, max }) => {
            stages.push(doc! {
                "$match": {
                    "$and": [
                        { "price": { "$gte": min } },
                        { "price": { "$lte": max } },
                    ]
                }
            });
        }
        Some(PriceFilter::AtLeast(min)) => {
            stages.push(doc! { "$match": { "price": { "$gte": min } } });
        }
        Some(PriceFilter::AtMost(max)) => {
            stages.push(doc! { "$match": { "price": { "$lte": max } } });
        }
        None => {
            stages.push(doc! { "$skip": page.offset() });
            stages.push(doc! { "$limit": page.limit() });
            return stages;
        }
    }

    if paginate_filtered {
        stages.push(doc! { "$skip": page.offset() });
        stages.push(doc! { "$limit": page.limit() });
    }

    stages
}

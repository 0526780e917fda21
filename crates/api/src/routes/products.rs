//! Catalog listing handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use clementine_core::{PageRequest, PriceRange};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::product::ListResponse;
use crate::state::AppState;

/// Raw query parameters for the listing endpoint.
///
/// Values are accepted as strings so that a malformed `offset` produces this
/// API's own 422 with the field name, not the extractor's generic 400.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    offset: Option<String>,
    limit: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
}

impl ListQuery {
    fn page(&self) -> Result<PageRequest> {
        let offset = parse_required_int("offset", self.offset.as_deref())?;
        let limit = parse_required_int("limit", self.limit.as_deref())?;
        PageRequest::new(offset, limit)
            .map_err(|e| AppError::validation(e.field(), e.to_string()))
    }

    fn prices(&self) -> Result<PriceRange> {
        Ok(PriceRange::new(
            parse_optional_number("min_price", self.min_price.as_deref())?,
            parse_optional_number("max_price", self.max_price.as_deref())?,
        ))
    }
}

/// List products with offset/limit pagination and optional price bounds.
///
/// The whole response comes from one aggregation round trip; see
/// [`crate::db::products`] for the pipeline.
///
/// # Errors
///
/// 422 when `offset`/`limit` are missing or malformed, or a price bound is
/// not a number. Storage faults surface as 500.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    let page = query.page()?;
    let prices = query.prices()?;

    let result = ProductRepository::new(state.database())
        .list(page, prices, state.config().catalog)
        .await?;

    Ok(Json(ListResponse { result }))
}

fn parse_required_int(field: &str, value: Option<&str>) -> Result<i64> {
    let value = value.ok_or_else(|| AppError::validation(field, "required query parameter"))?;
    value
        .parse()
        .map_err(|_| AppError::validation(field, "must be an integer"))
}

fn parse_optional_number(field: &str, value: Option<&str>) -> Result<Option<f64>> {
    value
        .map(|v| {
            v.parse()
                .map_err(|_| AppError::validation(field, "must be a number"))
        })
        .transpose()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn query(
        offset: Option<&str>,
        limit: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
    ) -> ListQuery {
        ListQuery {
            offset: offset.map(str::to_owned),
            limit: limit.map(str::to_owned),
            min_price: min_price.map(str::to_owned),
            max_price: max_price.map(str::to_owned),
        }
    }

    fn field_of(err: AppError) -> String {
        match err {
            AppError::Validation { field, .. } => field,
            AppError::Storage(e) => panic!("unexpected storage error: {e}"),
        }
    }

    #[test]
    fn missing_offset_names_the_field() {
        let err = query(None, Some("10"), None, None).page().unwrap_err();
        assert_eq!(field_of(err), "offset");
    }

    #[test]
    fn missing_limit_names_the_field() {
        let err = query(Some("0"), None, None, None).page().unwrap_err();
        assert_eq!(field_of(err), "limit");
    }

    #[test]
    fn non_integer_offset_is_rejected() {
        let err = query(Some("ten"), Some("10"), None, None)
            .page()
            .unwrap_err();
        assert_eq!(field_of(err), "offset");
    }

    #[test]
    fn negative_offset_is_rejected() {
        let err = query(Some("-1"), Some("10"), None, None)
            .page()
            .unwrap_err();
        assert_eq!(field_of(err), "offset");
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = query(Some("0"), Some("0"), None, None).page().unwrap_err();
        assert_eq!(field_of(err), "limit");
    }

    #[test]
    fn valid_page_parses() {
        let page = query(Some("20"), Some("10"), None, None).page().unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn malformed_min_price_is_rejected() {
        let err = query(Some("0"), Some("10"), Some("cheap"), None)
            .prices()
            .unwrap_err();
        assert_eq!(field_of(err), "min_price");
    }

    #[test]
    fn integer_price_bounds_parse_as_numbers() {
        let prices = query(Some("0"), Some("10"), Some("10"), Some("50"))
            .prices()
            .unwrap();
        assert!(prices.classify().is_some());
    }
}

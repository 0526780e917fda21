//! Offset/limit page requests.
//!
//! A [`PageRequest`] can only be constructed from a non-negative offset and a
//! positive limit, so downstream code never re-checks the bounds.

use thiserror::Error;

/// Errors from validating page parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// The offset was negative.
    #[error("offset must not be negative (got {0})")]
    NegativeOffset(i64),

    /// The limit was zero or negative.
    #[error("limit must be positive (got {0})")]
    NonPositiveLimit(i64),
}

impl PageError {
    /// The request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NegativeOffset(_) => "offset",
            Self::NonPositiveLimit(_) => "limit",
        }
    }
}

/// A validated offset/limit pair.
///
/// Offset is a record-count skip, limit a page size; both are kept as `i64`
/// because that is what the aggregation stages consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    limit: i64,
}

impl PageRequest {
    /// Validate and build a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NegativeOffset`] if `offset < 0` and
    /// [`PageError::NonPositiveLimit`] if `limit <= 0`.
    pub const fn new(offset: i64, limit: i64) -> Result<Self, PageError> {
        if offset < 0 {
            return Err(PageError::NegativeOffset(offset));
        }
        if limit <= 0 {
            return Err(PageError::NonPositiveLimit(limit));
        }
        Ok(Self { offset, limit })
    }

    /// The number of records to skip.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// The maximum number of records in the page.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }
}

//! Price range filtering for the catalog.

/// Optional lower and upper price bounds from a listing request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    min: Option<f64>,
    max: Option<f64>,
}

/// The concrete filter a [`PriceRange`] resolves to.
///
/// The variants are mutually exclusive and resolved in priority order: both
/// bounds beat a lower bound, which beats an upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceFilter {
    /// `min <= price <= max`, both bounds inclusive.
    Within { min: f64, max: f64 },
    /// `price >= min`.
    AtLeast(f64),
    /// `price <= max`.
    AtMost(f64),
}

impl PriceRange {
    /// Build a range from optional bounds. No bound ordering is enforced; an
    /// inverted range simply matches nothing.
    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Resolve the range into a filter, or `None` when unbounded.
    #[must_use]
    pub const fn classify(&self) -> Option<PriceFilter> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(PriceFilter::Within { min, max }),
            (Some(min), None) => Some(PriceFilter::AtLeast(min)),
            (None, Some(max)) => Some(PriceFilter::AtMost(max)),
            (None, None) => None,
        }
    }
}

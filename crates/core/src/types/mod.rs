//! Core types for Clementine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod page;
pub mod price;

pub use id::{OrderId, ProductId};
pub use page::{PageError, PageRequest};
pub use price::{PriceFilter, PriceRange};

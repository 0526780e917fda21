//! Domain models mapped to the stored documents and the wire format.

pub mod order;
pub mod product;

pub use order::{CreateOrder, Item, Order, UserAddress};
pub use product::{ListFacet, ListResponse, PageMeta, Product};

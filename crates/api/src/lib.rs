//! Clementine API library.
//!
//! This crate provides the catalog and order service as a library, allowing
//! it to be tested in-process and reused by the CLI.
//!
//! # Components
//!
//! - Catalog listing: one facet aggregation computes the page of products
//!   and the next/previous offsets in a single round trip
//! - Order recording: validated payloads are stamped with a creation time
//!   and appended to the `orders` collection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

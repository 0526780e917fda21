//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across all Clementine components:
//! - `api` - The catalog and order HTTP service
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Opaque entity identifiers, page requests, price ranges

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

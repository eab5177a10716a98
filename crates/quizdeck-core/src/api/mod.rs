//! Catalog transport module.
//!
//! This module provides the `CatalogSource` trait the question bank loads
//! through, the HTTP `CatalogClient` that implements it in production, and
//! the `CatalogError` type covering everything a fetch can fail with.

pub mod client;
pub mod error;
pub mod source;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use source::CatalogSource;

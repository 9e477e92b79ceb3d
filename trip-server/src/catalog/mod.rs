//! Read-only catalog of destinations, places and reviews.
//!
//! The catalog itself is owned by an external store. This module loads
//! snapshots of it, either from a JSON file or from a remote catalog
//! service, and exposes them to the planner through [`CatalogReader`].

mod cache;
mod client;
mod error;
mod file;
mod reader;
mod snapshot;

pub use cache::{CacheConfig, CachedCatalog};
pub use client::{CatalogClient, CatalogClientConfig};
pub use error::CatalogError;
pub use file::load_snapshot;
pub use reader::{CatalogReader, CatalogSource};
pub use snapshot::{CatalogSnapshot, catalog_order};

//! Couch Gallery Data
//!
//! Read-only reference data: the quick links shown in the embedded
//! browser's control bar and the anime catalog behind the gallery view.
//! Nothing here is user-mutable.

mod catalog;
mod links;

pub use catalog::{Catalog, CatalogEntry, Category};
pub use links::{quick_links, QuickLink};

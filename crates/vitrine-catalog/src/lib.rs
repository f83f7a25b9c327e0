//! Catalog data model and loading for vitrine.
//!
//! A catalog is a TOML file describing the landing pages of one product
//! segment. Records are authored by hand and loaded fresh on every run.

pub mod loader;
pub mod record;

pub use loader::{discover_catalogs, load_catalog, CatalogError};
pub use record::{AppRecord, Catalog, Feature, PageVariant, RecordError, StorefrontMeta};

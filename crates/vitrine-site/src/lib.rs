//! Batch publishing for vitrine.
//!
//! Takes loaded catalogs, renders every record, and fans each document out
//! to its two delivery locations. Failures are scoped to single records;
//! the batch always runs to completion and reports a summary.

pub mod driver;
pub mod publisher;

pub use driver::{FailedRecord, RunSummary, SiteConfig, SiteDriver, SiteError};
pub use publisher::{Published, PublishError, Publisher};

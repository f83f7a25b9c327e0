//! Catalog validation command.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use vitrine_catalog::{discover_catalogs, RecordError};

use crate::config::load_config;

/// Run the check command: validate every catalog without writing output.
pub async fn run() -> Result<()> {
    let file_config = load_config()?;

    let catalog_dir = PathBuf::from(&file_config.catalog.dir);
    let catalogs = discover_catalogs(&catalog_dir)?;

    let mut records = 0usize;
    let mut problems = 0usize;
    let mut seen: HashSet<String> = HashSet::new();

    for (path, catalog) in &catalogs {
        for record in &catalog.apps {
            records += 1;

            if let Err(e) = record.validate(catalog.variant) {
                problems += 1;
                tracing::error!("{}: {}: {}", path.display(), record.id, e);
                continue;
            }

            if !seen.insert(record.id.clone()) {
                problems += 1;
                let e = RecordError::DuplicateId {
                    id: record.id.clone(),
                };
                tracing::error!("{}: {}", path.display(), e);
            }
        }
    }

    if problems > 0 {
        anyhow::bail!("{} of {} record(s) failed validation", problems, records);
    }

    tracing::info!(
        "All {} record(s) across {} catalog(s) are valid",
        records,
        catalogs.len()
    );

    Ok(())
}

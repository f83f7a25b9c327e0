//! Batch build command.

use std::path::PathBuf;

use anyhow::Result;
use vitrine_catalog::discover_catalogs;
use vitrine_site::{SiteConfig, SiteDriver};

use crate::config::load_config;

/// Run the build command.
pub async fn run(output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Generating landing pages...");

    let file_config = load_config()?;

    let catalog_dir = PathBuf::from(&file_config.catalog.dir);
    let catalogs = discover_catalogs(&catalog_dir)?;
    if catalogs.is_empty() {
        anyhow::bail!(
            "No catalogs found in {}. Run 'vitrine init' first.",
            catalog_dir.display()
        );
    }

    for (path, catalog) in &catalogs {
        tracing::info!(
            "Catalog {}: {} record(s), {} template",
            path.display(),
            catalog.apps.len(),
            catalog.variant.as_str()
        );
    }

    let config = SiteConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.build.output)),
        minify: minify.unwrap_or(file_config.build.minify),
    };
    let output_dir = config.output_dir.clone();

    let loaded: Vec<_> = catalogs.into_iter().map(|(_, catalog)| catalog).collect();
    let summary = SiteDriver::new(config).run(&loaded)?;

    tracing::info!(
        "Published {} page(s) in {}ms",
        summary.succeeded,
        summary.duration_ms
    );
    tracing::info!("Output: {}", output_dir.display());

    // Per-record errors were already logged by the driver; the non-zero
    // exit is for automation callers that check status.
    if !summary.is_clean() {
        anyhow::bail!("{} record(s) failed", summary.failed.len());
    }

    Ok(())
}

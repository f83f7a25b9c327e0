//! Batch driver: validate, render, publish, summarize.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use vitrine_catalog::{AppRecord, Catalog, PageVariant, RecordError};
use vitrine_render::{PageRenderer, RenderOptions};

use crate::publisher::{Published, Publisher};

/// Configuration for a site run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base directory the per-record output trees are created under.
    pub output_dir: PathBuf,

    /// Minify each page's inline stylesheet.
    pub minify: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("apps"),
            minify: false,
        }
    }
}

/// One record that did not make it to disk, and why.
#[derive(Debug, serde::Serialize)]
pub struct FailedRecord {
    pub id: String,
    pub reason: String,
}

/// Result of one batch run.
#[derive(Debug, serde::Serialize)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: Vec<FailedRecord>,
    pub duration_ms: u64,
}

impl RunSummary {
    /// Whether every record published cleanly.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Errors fatal to the whole run, as opposed to per-record failures.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to create output directory {path}: {message}")]
    CreateOutput { path: String, message: String },

    #[error("Failed to write manifest: {0}")]
    Manifest(String),
}

/// Drives a whole batch of catalogs through render and publish.
pub struct SiteDriver {
    config: SiteConfig,
    renderer: PageRenderer,
    publisher: Publisher,
}

impl SiteDriver {
    pub fn new(config: SiteConfig) -> Self {
        let renderer = PageRenderer::new(RenderOptions {
            minify: config.minify,
        });
        let publisher = Publisher::new(&config.output_dir);

        Self {
            config,
            renderer,
            publisher,
        }
    }

    /// Render and publish every record of every catalog, in order.
    ///
    /// Records are validated up front so malformed entries are rejected
    /// before the first filesystem write. Every later failure is scoped to
    /// its record: the batch continues and the summary reports the tally.
    pub fn run(&self, catalogs: &[Catalog]) -> Result<RunSummary, SiteError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir).map_err(|e| SiteError::CreateOutput {
            path: self.config.output_dir.display().to_string(),
            message: e.to_string(),
        })?;

        // Validation pass, before anything touches the output tree.
        let mut failed: Vec<FailedRecord> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut pending: Vec<(PageVariant, &AppRecord)> = Vec::new();

        for catalog in catalogs {
            for record in &catalog.apps {
                if let Err(e) = record.validate(catalog.variant) {
                    tracing::error!("Skipping {}: {}", record.id, e);
                    failed.push(FailedRecord {
                        id: record.id.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }

                // A duplicate would silently overwrite the earlier
                // record's output tree; fail the later one instead.
                if !seen.insert(record.id.as_str()) {
                    let e = RecordError::DuplicateId {
                        id: record.id.clone(),
                    };
                    tracing::error!("Skipping {}: {}", record.id, e);
                    failed.push(FailedRecord {
                        id: record.id.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }

                pending.push((catalog.variant, record));
            }
        }

        let mut manifest: Vec<serde_json::Value> = Vec::new();
        let mut succeeded = 0usize;

        for (variant, record) in pending {
            match self.publish_record(record, variant) {
                Ok(published) => {
                    succeeded += 1;
                    tracing::info!("Published {} ({})", record.id, variant.as_str());
                    manifest.push(serde_json::json!({
                        "id": record.id,
                        "title": record.title,
                        "variant": variant.as_str(),
                        "paths": [
                            self.relative_path(&published.docs),
                            self.relative_path(&published.landing),
                        ],
                    }));
                }
                Err(reason) => {
                    tracing::error!("Failed to publish {}: {}", record.id, reason);
                    failed.push(FailedRecord {
                        id: record.id.clone(),
                        reason,
                    });
                }
            }
        }

        self.write_manifest(&manifest)?;

        Ok(RunSummary {
            succeeded,
            failed,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn publish_record(
        &self,
        record: &AppRecord,
        variant: PageVariant,
    ) -> Result<Published, String> {
        let html = self
            .renderer
            .render(record, variant)
            .map_err(|e| e.to_string())?;

        self.publisher
            .publish(&record.id, &html)
            .map_err(|e| e.to_string())
    }

    fn relative_path(&self, path: &std::path::Path) -> String {
        path.strip_prefix(&self.config.output_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Write the page manifest for downstream hosts.
    fn write_manifest(&self, entries: &[serde_json::Value]) -> Result<(), SiteError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| SiteError::Manifest(e.to_string()))?;

        fs::write(self.config.output_dir.join("manifest.json"), json)
            .map_err(|e| SiteError::Manifest(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vitrine_catalog::Feature;

    fn record(id: &str, accent: &str) -> AppRecord {
        AppRecord {
            id: id.to_string(),
            title: format!("App {id}"),
            logo: "AP".to_string(),
            accent: accent.to_string(),
            accent_secondary: None,
            tagline: "Tagline".to_string(),
            description: "Description".to_string(),
            features: vec![Feature {
                glyph: "🔧".to_string(),
                title: "Feature".to_string(),
                description: "Detail".to_string(),
            }],
            storefront: None,
        }
    }

    fn catalog(apps: Vec<AppRecord>) -> Catalog {
        Catalog {
            title: None,
            variant: PageVariant::Concept,
            apps,
        }
    }

    #[test]
    fn publishes_identical_bytes_to_both_locations() {
        let temp = tempdir().unwrap();
        let driver = SiteDriver::new(SiteConfig {
            output_dir: temp.path().to_path_buf(),
            minify: false,
        });

        let summary = driver
            .run(&[catalog(vec![record("alpha", "#10b981")])])
            .unwrap();

        assert_eq!(summary.succeeded, 1);
        assert!(summary.is_clean());

        let docs = fs::read(temp.path().join("alpha/docs/index.html")).unwrap();
        let landing = fs::read(temp.path().join("alpha/landing-page/index.html")).unwrap();
        assert_eq!(docs, landing);
    }

    #[test]
    fn reruns_are_byte_identical() {
        let temp = tempdir().unwrap();
        let driver = SiteDriver::new(SiteConfig {
            output_dir: temp.path().to_path_buf(),
            minify: false,
        });
        let catalogs = [catalog(vec![record("alpha", "#10b981")])];

        driver.run(&catalogs).unwrap();
        let first = fs::read(temp.path().join("alpha/docs/index.html")).unwrap();

        driver.run(&catalogs).unwrap();
        let second = fs::read(temp.path().join("alpha/docs/index.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn bad_record_does_not_block_the_rest() {
        let temp = tempdir().unwrap();
        let driver = SiteDriver::new(SiteConfig {
            output_dir: temp.path().to_path_buf(),
            minify: false,
        });

        let summary = driver
            .run(&[catalog(vec![
                record("one", "#10b981"),
                record("two", "#not-a-color"),
                record("three", "#ea580c"),
            ])])
            .unwrap();

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].id, "two");

        assert!(temp.path().join("one/docs/index.html").exists());
        assert!(temp.path().join("three/docs/index.html").exists());
        assert!(!temp.path().join("two").exists());
    }

    #[test]
    fn duplicate_id_fails_the_later_record() {
        let temp = tempdir().unwrap();
        let driver = SiteDriver::new(SiteConfig {
            output_dir: temp.path().to_path_buf(),
            minify: false,
        });

        let summary = driver
            .run(&[
                catalog(vec![record("alpha", "#10b981")]),
                catalog(vec![record("alpha", "#ea580c")]),
            ])
            .unwrap();

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].reason.contains("Duplicate identifier"));

        // The survivor is the first catalog's record.
        let html = fs::read_to_string(temp.path().join("alpha/docs/index.html")).unwrap();
        assert!(html.contains("(16, 185, 129, 0.15)"));
    }

    #[test]
    fn writes_a_manifest_of_published_pages() {
        let temp = tempdir().unwrap();
        let driver = SiteDriver::new(SiteConfig {
            output_dir: temp.path().to_path_buf(),
            minify: false,
        });

        driver
            .run(&[catalog(vec![
                record("alpha", "#10b981"),
                record("beta", "#bad"),
            ])])
            .unwrap();

        let manifest = fs::read_to_string(temp.path().join("manifest.json")).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&manifest).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["id"], "alpha");
        assert_eq!(entries[0]["variant"], "concept");
        assert_eq!(entries[0]["paths"][0], "alpha/docs/index.html");
    }

    #[test]
    fn empty_catalog_list_is_a_clean_run() {
        let temp = tempdir().unwrap();
        let driver = SiteDriver::new(SiteConfig {
            output_dir: temp.path().to_path_buf(),
            minify: false,
        });

        let summary = driver.run(&[]).unwrap();

        assert_eq!(summary.succeeded, 0);
        assert!(summary.is_clean());
        assert!(temp.path().join("manifest.json").exists());
    }
}

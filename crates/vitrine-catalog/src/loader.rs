//! Catalog file loading and discovery.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::record::Catalog;

/// Errors that can occur while loading catalog files.
///
/// These are file-fatal: a catalog that cannot be read or parsed never
/// yields records. Per-record problems are [`crate::RecordError`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Read(String),

    #[error("Failed to parse catalog {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Catalog directory not found: {0}")]
    DirNotFound(String),
}

/// Load a single catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CatalogError::Read(format!("{}: {}", path.display(), e)))?;

    let catalog: Catalog = toml::from_str(&content).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(catalog)
}

/// Discover and load every `*.toml` catalog under `dir`.
///
/// Files are visited in sorted path order so batches are reproducible
/// regardless of directory enumeration order.
pub fn discover_catalogs(dir: &Path) -> Result<Vec<(PathBuf, Catalog)>, CatalogError> {
    if !dir.exists() {
        return Err(CatalogError::DirNotFound(dir.display().to_string()));
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("toml"))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    let mut catalogs = Vec::with_capacity(paths.len());
    for path in paths {
        let catalog = load_catalog(&path)?;
        tracing::debug!(
            "Loaded catalog {} ({} records)",
            path.display(),
            catalog.apps.len()
        );
        catalogs.push((path, catalog));
    }

    Ok(catalogs)
}

//! Two-path fan-out writer.

use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while publishing one record's document.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Failed to create directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Where one record's document landed.
#[derive(Debug, Clone)]
pub struct Published {
    pub docs: PathBuf,
    pub landing: PathBuf,
}

/// Writes rendered documents to their two delivery locations.
///
/// Every record is published to `{id}/docs/index.html` (the hosted-pages
/// mechanism) and `{id}/landing-page/index.html` (the repo-relative
/// preview). Both receive the identical bytes as independent real files;
/// the consumers are separate external systems with no shared filesystem
/// guarantee, so no symlinking.
pub struct Publisher {
    out_dir: PathBuf,
}

impl Publisher {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Publish one document, overwriting any prior content.
    ///
    /// Targets are written in order; a failure aborts the record before
    /// the next write, and an already-written first target is left intact.
    pub fn publish(&self, id: &str, html: &str) -> Result<Published, PublishError> {
        let docs = self.out_dir.join(id).join("docs").join("index.html");
        let landing = self.out_dir.join(id).join("landing-page").join("index.html");

        write_target(&docs, html)?;
        write_target(&landing, html)?;

        Ok(Published { docs, landing })
    }
}

fn write_target(target: &Path, html: &str) -> Result<(), PublishError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| PublishError::CreateDir {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }

    fs::write(target, html).map_err(|e| PublishError::Write {
        path: target.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn publishes_identical_bytes_to_both_targets() {
        let temp = tempdir().unwrap();
        let publisher = Publisher::new(temp.path());

        let published = publisher.publish("demo-app", "<html>demo</html>").unwrap();

        assert_eq!(
            published.docs,
            temp.path().join("demo-app").join("docs").join("index.html")
        );
        assert_eq!(
            published.landing,
            temp.path()
                .join("demo-app")
                .join("landing-page")
                .join("index.html")
        );

        let docs = fs::read(&published.docs).unwrap();
        let landing = fs::read(&published.landing).unwrap();
        assert_eq!(docs, landing);
        assert_eq!(docs, b"<html>demo</html>");
    }

    #[test]
    fn overwrites_prior_content() {
        let temp = tempdir().unwrap();
        let publisher = Publisher::new(temp.path());

        publisher.publish("demo-app", "old").unwrap();
        publisher.publish("demo-app", "new").unwrap();

        let docs = fs::read_to_string(temp.path().join("demo-app/docs/index.html")).unwrap();
        let landing =
            fs::read_to_string(temp.path().join("demo-app/landing-page/index.html")).unwrap();
        assert_eq!(docs, "new");
        assert_eq!(landing, "new");
    }

    #[test]
    fn reports_the_failing_path() {
        let temp = tempdir().unwrap();
        // A file where the record directory should go makes create_dir_all fail.
        fs::write(temp.path().join("blocked"), "in the way").unwrap();

        let publisher = Publisher::new(temp.path());
        let err = publisher.publish("blocked", "<html></html>").unwrap_err();

        assert!(err.to_string().contains("blocked"));
    }
}

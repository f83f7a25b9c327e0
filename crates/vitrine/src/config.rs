//! Project configuration file (vitrine.toml).

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (vitrine.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Directory containing the catalog TOML files
    #[serde(default = "default_catalog_dir")]
    pub dir: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    /// Base directory the per-app output trees are created under
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: false,
        }
    }
}

fn default_catalog_dir() -> String {
    "catalogs".to_string()
}
fn default_output() -> String {
    "apps".to_string()
}

/// Load configuration from vitrine.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config() -> Result<ProjectConfig> {
    let config_path = PathBuf::from("vitrine.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read vitrine.toml: {}", e))?;
        let config: ProjectConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse vitrine.toml: {}", e))?;
        tracing::info!("Loaded config from vitrine.toml");
        return Ok(config);
    }
    Ok(ProjectConfig::default())
}

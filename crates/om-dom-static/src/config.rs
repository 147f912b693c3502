//! Configuration file structure (om.toml).

use std::fs;
use std::path::Path;

use om_dom::RenderConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct OmConfig {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Host page settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageConfig {
    /// Document title
    #[serde(default = "default_title")]
    pub title: String,

    /// `lang` attribute of the html element
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Id of the element the tree is mounted into
    #[serde(default = "default_mount_id")]
    pub mount_id: String,

    /// Stylesheet URLs to link
    #[serde(default)]
    pub styles: Vec<String>,

    /// Script URLs to include after the mount point
    #[serde(default)]
    pub scripts: Vec<String>,
}

fn default_title() -> String {
    "om".to_string()
}
fn default_lang() -> String {
    "en".to_string()
}
fn default_mount_id() -> String {
    "app".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            lang: default_lang(),
            mount_id: default_mount_id(),
            styles: vec![],
            scripts: vec![],
        }
    }
}

impl OmConfig {
    /// Parse configuration from TOML source.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<OmConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(OmConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let config = OmConfig::from_toml(&content)?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

//! Loading of `casecheck.toml`.
//!
//! ```toml
//! [naming]
//! field = "camelCase"
//! constant = "UPPER_SNAKE_CASE"
//!
//! [files]
//! extensions = ["java"]
//! ```
//!
//! Values under `[naming]` are kept as strings; the linter decides which
//! role and style names are valid.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File name looked up by [`Config::find`].
pub const CONFIG_FILE_NAME: &str = "casecheck.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Role name to expected casing style, e.g. `field = "camelCase"`.
    #[serde(default)]
    pub naming: BTreeMap<String, String>,

    #[serde(default)]
    pub files: FilesConfig,
}

/// Which files the CLI picks up when walking directories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), roles = config.naming.len(), "loaded config");
        Ok(config)
    }

    /// Looks for [`CONFIG_FILE_NAME`] in `start` and its ancestors.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// `[naming]` entries as borrowed key/value pairs.
    pub fn naming_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.naming
            .iter()
            .map(|(role, style)| (role.as_str(), style.as_str()))
    }

    /// Whether the CLI should check a file with this path.
    pub fn accepts_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.files.extensions.iter().any(|e| e == ext))
    }
}

//! CLI configuration file.

use std::path::{Path, PathBuf};

use gymhealth_api::ApiConfig;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Errors raised while reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings for the `gymhealth` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Progress API
    #[serde(default)]
    pub api: ApiConfig,

    /// Where the access token is kept
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,

    /// Rows printed by `history` (0 = all)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from(".gymhealth").join("credentials.json")
}

fn default_history_limit() -> usize {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            credentials_path: default_credentials_path(),
            history_limit: default_history_limit(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. A missing file yields the defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path).await {
            Ok(json) => serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

//! JSON file credential store.
//!
//! Stores the token as `{"access_token": ..., "updated_at": ...}` in a single
//! file. Parent directories are created on first save.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use super::{CredentialStore, Result};

#[derive(Debug, Serialize, Deserialize)]
struct StoredCredential {
    access_token: String,
    #[serde(default)]
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// File-based JSON credential store.
#[derive(Debug, Clone)]
pub struct JsonCredentialStore {
    path: PathBuf,
}

impl JsonCredentialStore {
    /// Create a store backed by `path`. Nothing is touched until first use.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl CredentialStore for JsonCredentialStore {
    async fn access_token(&self) -> Result<Option<String>> {
        let stored: Option<StoredCredential> = read_json(&self.path).await?;
        Ok(stored
            .map(|s| s.access_token)
            .filter(|token| !token.trim().is_empty()))
    }

    async fn save_access_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let stored = StoredCredential {
            access_token: token.to_string(),
            updated_at: Some(chrono::Utc::now()),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, json.as_bytes()).await?;
        debug!("Saved access token to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        fs::remove_file(&self.path).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

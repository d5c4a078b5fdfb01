//! In-memory credential store.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::{CredentialStore, Result};

/// Credential store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentialStore {
    /// Empty store (not logged in).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.token.lock().await.clone())
    }

    async fn save_access_token(&self, token: &str) -> Result<()> {
        *self.token.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.token.lock().await = None;
        Ok(())
    }
}

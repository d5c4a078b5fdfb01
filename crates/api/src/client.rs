//! Progress API client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gymhealth_core::{RawProgressRecord, RecordId};
use gymhealth_storage::CredentialStore;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::{ApiConfig, ApiError, Result};

/// The progress endpoints consumed by the screens.
#[async_trait]
pub trait ProgressApi: Send + Sync {
    /// `GET /progress/my-progress/`: every record of the logged-in member.
    async fn my_progress(&self) -> Result<Vec<RawProgressRecord>>;

    /// `GET /progress/{id}/`: a single record.
    async fn progress(&self, id: RecordId) -> Result<RawProgressRecord>;

    /// `DELETE /progress/{id}/`.
    async fn delete_progress(&self, id: RecordId) -> Result<()>;
}

/// HTTP implementation of [`ProgressApi`].
///
/// Reads the bearer token from the credential store on every request.
pub struct HttpProgressApi<C: CredentialStore> {
    /// HTTP client
    client: Client,

    /// Server URL without trailing slash
    base_url: String,

    /// Token source
    credentials: Arc<C>,
}

impl<C: CredentialStore> HttpProgressApi<C> {
    /// Create a client.
    pub fn new(config: &ApiConfig, credentials: C) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: Arc::new(credentials),
        })
    }

    /// Full URL for an API path such as `progress/my-progress/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn bearer(&self) -> Result<String> {
        self.credentials
            .access_token()
            .await?
            .ok_or(ApiError::MissingCredential)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let token = self.bearer().await?;
        let response = request.bearer_auth(token).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl<C: CredentialStore + 'static> ProgressApi for HttpProgressApi<C> {
    async fn my_progress(&self) -> Result<Vec<RawProgressRecord>> {
        let url = self.endpoint("progress/my-progress/");
        debug!("GET {}", url);

        let response = self.send(self.client.get(&url)).await?;
        let body: serde_json::Value = response.json().await?;
        let records = parse_record_list(body)?;

        debug!("Fetched {} progress records", records.len());
        Ok(records)
    }

    async fn progress(&self, id: RecordId) -> Result<RawProgressRecord> {
        let url = self.endpoint(&format!("progress/{}/", id));
        debug!("GET {}", url);

        let response = match self.send(self.client.get(&url)).await {
            Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Err(ApiError::NotFound(id));
            }
            other => other?,
        };

        let body: serde_json::Value = response.json().await?;
        if body.is_null() {
            return Err(ApiError::NotFound(id));
        }
        if !body.is_object() {
            return Err(ApiError::Decode(format!("expected a record object, got {}", kind_of(&body))));
        }
        Ok(serde_json::from_value(body)?)
    }

    async fn delete_progress(&self, id: RecordId) -> Result<()> {
        let url = self.endpoint(&format!("progress/{}/", id));
        debug!("DELETE {}", url);

        match self.send(self.client.delete(&url)).await {
            Ok(_) => Ok(()),
            Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(ApiError::NotFound(id))
            }
            Err(e) => Err(e),
        }
    }
}

/// Accept a bare array or a paginated `{"results": [...]}` envelope.
fn parse_record_list(body: serde_json::Value) -> Result<Vec<RawProgressRecord>> {
    let items = match body {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("results") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Err(ApiError::Decode("expected a list of records".to_string())),
        },
        other => {
            return Err(ApiError::Decode(format!("expected a list of records, got {}", kind_of(&other))));
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ApiError::from))
        .collect()
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

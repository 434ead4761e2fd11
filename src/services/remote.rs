//! Remote paper service speaking the papers HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::models::{PagedResult, Paper, PaperId};
use crate::services::{validate_paging, PaperService, ServiceCapabilities, ServiceError};

/// Paper service backed by a remote HTTP API.
///
/// Endpoints:
///
/// - `GET {base}/papers?page={p}&per_page={n}` -> [`PagedResult`]
/// - `GET {base}/papers/{id}` -> [`Paper`]
///
/// The search and like surface is not available upstream; those calls fail
/// with [`ServiceError::NotImplemented`] through the trait defaults, and
/// [`capabilities`](PaperService::capabilities) reports `LIST | LOOKUP`
/// only. No retry or backoff: failures surface directly to the caller.
#[derive(Debug, Clone)]
pub struct RemotePaperService {
    client: Client,
    base_url: String,
}

impl RemotePaperService {
    /// Create a service talking to `base_url` with default client settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client, base_url)
    }

    /// Create from an existing reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// The configured base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PaperService for RemotePaperService {
    fn id(&self) -> &str {
        "remote"
    }

    fn name(&self) -> &str {
        "Remote Paper Service"
    }

    fn capabilities(&self) -> ServiceCapabilities {
        ServiceCapabilities::LIST | ServiceCapabilities::LOOKUP
    }

    async fn list_papers(&self, page: u32, per_page: u32) -> Result<PagedResult, ServiceError> {
        validate_paging(page, per_page)?;

        let url = format!("{}/papers", self.base_url);
        tracing::debug!(%url, page, per_page, "listing papers");

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Failed to list papers: {}", e)))?;

        if !response.status().is_success() {
            return Err(ServiceError::Api(format!(
                "Papers API returned status: {}",
                response.status()
            )));
        }

        response
            .json::<PagedResult>()
            .await
            .map_err(|e| ServiceError::Parse(format!("Failed to parse listing: {}", e)))
    }

    async fn get_paper(&self, id: &PaperId) -> Result<Paper, ServiceError> {
        let url = format!(
            "{}/papers/{}",
            self.base_url,
            urlencoding::encode(&id.to_string())
        );
        tracing::debug!(%url, "fetching paper");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Failed to fetch paper: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(ServiceError::Api(format!(
                "Papers API returned status: {}",
                response.status()
            )));
        }

        response
            .json::<Paper>()
            .await
            .map_err(|e| ServiceError::Parse(format!("Failed to parse paper: {}", e)))
    }
}

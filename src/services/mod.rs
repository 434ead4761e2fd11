//! Paper data sources behind a single trait-based abstraction.
//!
//! This module defines the [`PaperService`] trait both backends implement.
//! Capabilities differ per backend: the mock source implements the whole
//! surface while the remote source only covers listing and lookup. The
//! difference is visible two ways, so callers never discover it by
//! accident at runtime:
//!
//! - [`PaperService::capabilities`] reports what a service supports up
//!   front as [`ServiceCapabilities`] flags;
//! - unimplemented operations keep the default trait bodies and fail with
//!   [`ServiceError::NotImplemented`] rather than silently succeeding.
//!
//! Services are constructed by the host (see [`crate::config`]) and passed
//! in explicitly; there is no process-wide instance.

pub mod mock;
pub mod remote;

pub use mock::MockPaperService;
pub use remote::RemotePaperService;

use async_trait::async_trait;

use crate::models::{PagedResult, Paper, PaperId};

bitflags::bitflags! {
    /// Capabilities that a paper service can support
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ServiceCapabilities: u32 {
        const LIST = 1 << 0;
        const LOOKUP = 1 << 1;
        const SEARCH = 1 << 2;
        const LIKES = 1 << 3;
    }
}

/// Interface to a backend that provides papers to browse.
///
/// `list_papers` and `get_paper` are required; the search and like surface
/// defaults to [`ServiceError::NotImplemented`] so partial backends stay
/// honest about what they support.
#[async_trait]
pub trait PaperService: Send + Sync + std::fmt::Debug {
    /// Short identifier for this service (used in logs, e.g. "mock", "remote")
    fn id(&self) -> &str;

    /// Human-readable name of this service
    fn name(&self) -> &str;

    /// Describe the capabilities of this service
    fn capabilities(&self) -> ServiceCapabilities {
        ServiceCapabilities::LIST | ServiceCapabilities::LOOKUP
    }

    /// Whether this service supports substring search
    fn supports_search(&self) -> bool {
        self.capabilities().contains(ServiceCapabilities::SEARCH)
    }

    /// Whether this service supports the like/unlike side channel
    fn supports_likes(&self) -> bool {
        self.capabilities().contains(ServiceCapabilities::LIKES)
    }

    /// Fetch one page of papers. Pages are 1-based.
    async fn list_papers(&self, page: u32, per_page: u32) -> Result<PagedResult, ServiceError>;

    /// Fetch a single paper by id
    async fn get_paper(&self, id: &PaperId) -> Result<Paper, ServiceError>;

    /// Case-insensitive substring search over title and abstract
    async fn search_papers(&self, _query: &str) -> Result<PagedResult, ServiceError> {
        Err(ServiceError::NotImplemented)
    }

    /// Papers the user has liked
    async fn liked_papers(&self) -> Result<Vec<Paper>, ServiceError> {
        Err(ServiceError::NotImplemented)
    }

    /// Mark a paper as liked
    async fn like_paper(&self, _id: &PaperId) -> Result<(), ServiceError> {
        Err(ServiceError::NotImplemented)
    }

    /// Remove a like
    async fn unlike_paper(&self, _id: &PaperId) -> Result<(), ServiceError> {
        Err(ServiceError::NotImplemented)
    }
}

/// Errors that can occur when talking to a paper service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The requested operation is not implemented by this service
    #[error("Operation not implemented for this service")]
    NotImplemented,

    /// Paper not found
    #[error("Paper not found: {0}")]
    NotFound(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-success status from the backend
    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Parse(format!("JSON: {}", err))
    }
}

/// Reject paging parameters the slice math cannot represent. Pages are
/// 1-based and a zero-sized page is meaningless.
pub(crate) fn validate_paging(page: u32, per_page: u32) -> Result<(), ServiceError> {
    if page == 0 {
        return Err(ServiceError::InvalidRequest(
            "page must be >= 1".to_string(),
        ));
    }
    if per_page == 0 {
        return Err(ServiceError::InvalidRequest(
            "per_page must be >= 1".to_string(),
        ));
    }
    Ok(())
}

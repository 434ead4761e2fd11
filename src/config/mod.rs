//! Configuration management and service selection.
//!
//! The active [`PaperService`] variant is chosen once from configuration
//! and handed to the deck explicitly; nothing here is a global. Debug
//! builds default to the mock service, everything else to the remote one.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::services::{MockPaperService, PaperService, RemotePaperService};

/// Which paper service variant to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    Mock,
    Remote,
}

impl Default for ServiceMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ServiceMode::Mock
        } else {
            ServiceMode::Remote
        }
    }
}

/// Paper service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service variant; defaults by build profile
    #[serde(default)]
    pub mode: ServiceMode,

    /// Base URL for the remote variant
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size for the deck's single forward fetch
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mode: ServiceMode::default(),
            base_url: default_base_url(),
            per_page: default_per_page(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_per_page() -> u32 {
    20
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Load configuration from a file, layered with `PAPERDECK_*` environment
/// variables (e.g. `PAPERDECK_SERVICE__MODE=remote`).
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("PAPERDECK").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Construct the configured service. The result is meant to be passed into
/// [`Deck::load`](crate::deck::Deck::load) by the host.
pub fn build_service(config: &Config) -> Arc<dyn PaperService> {
    match config.service.mode {
        ServiceMode::Mock => Arc::new(MockPaperService::new()),
        ServiceMode::Remote => Arc::new(RemotePaperService::new(config.service.base_url.clone())),
    }
}

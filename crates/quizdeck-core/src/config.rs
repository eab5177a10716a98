//! Catalog location configuration.
//!
//! The host application decides where the catalog lives; this module only
//! carries that decision to the client. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Default path of the catalog document relative to the base URL
const DEFAULT_CATALOG_PATH: &str = "data/questions.json";

/// Default HTTP request timeout in seconds.
/// 30s allows for slow static hosts while failing fast enough for good UX.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL the host application serves its static assets from
    pub base_url: String,
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            catalog_path: default_catalog_path(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Full catalog URL, joining base and path with exactly one slash
    pub fn catalog_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.catalog_path.trim_start_matches('/')
        )
    }
}

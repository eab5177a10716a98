//! HTTP client for fetching the static question catalog.
//!
//! This module provides the `CatalogClient` struct, the production
//! [`CatalogSource`] implementation. The catalog is a single static JSON
//! document, so the client makes exactly one unauthenticated GET per fetch.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::models::Question;

use super::{CatalogError, CatalogSource};

/// HTTP source for the question catalog.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    catalog_url: String,
}

impl CatalogClient {
    /// Create a new catalog client from the given configuration
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            catalog_url: config.catalog_url(),
        })
    }

    /// The URL this client fetches the catalog from.
    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// Check whether a Content-Type header advertises a JSON payload.
    /// A misconfigured static host will happily serve an HTML error page
    /// with status 200, which must not reach the parser.
    fn is_json_content_type(content_type: &str) -> bool {
        let essence = content_type.split(';').next().unwrap_or("").trim();
        essence.eq_ignore_ascii_case("application/json")
            || essence.eq_ignore_ascii_case("text/json")
            || essence.to_ascii_lowercase().ends_with("+json")
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CatalogError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(CatalogError::from_status(status, &body))
        }
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<Question>, CatalogError> {
        let response = self
            .client
            .get(&self.catalog_url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_response(response).await?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !Self::is_json_content_type(&content_type) {
            let label = if content_type.is_empty() {
                "no content type".to_string()
            } else {
                content_type
            };
            return Err(CatalogError::UnsupportedPayload(label));
        }

        let body = response.text().await?;
        let questions: Vec<Question> = serde_json::from_str(&body)?;

        debug!(
            count = questions.len(),
            url = %self.catalog_url,
            "Fetched question catalog"
        );
        Ok(questions)
    }
}

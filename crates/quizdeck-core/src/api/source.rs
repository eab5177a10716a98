use async_trait::async_trait;

use super::error::CatalogError;
use crate::models::Question;

/// Where the question bank pulls its catalog from.
///
/// Production uses [`CatalogClient`](super::CatalogClient) over HTTP; tests
/// substitute deterministic in-memory sources. The bank treats any error as
/// "no catalog" and keeps the empty result for the rest of the session.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full question catalog.
    async fn fetch_catalog(&self) -> Result<Vec<Question>, CatalogError>;
}

//! Session-scoped question bank.
//!
//! This module provides `QuestionBank`, which fetches the static catalog once,
//! keeps it for the lifetime of the bank, and serves filtered and shuffled
//! views of it. A failed fetch is logged and the session continues with an
//! empty catalog; `reset` starts a fresh session.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::OnceCell;
use tracing::{debug, error};

use crate::api::{CatalogClient, CatalogSource};
use crate::catalog::filter;
use crate::config::CatalogConfig;
use crate::models::{Question, Settings};
use crate::shuffle;

pub struct QuestionBank {
    source: Arc<dyn CatalogSource>,
    catalog: OnceCell<Arc<[Question]>>,
}

impl QuestionBank {
    /// Create a bank over an arbitrary catalog source
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            catalog: OnceCell::new(),
        }
    }

    /// Create a bank backed by the HTTP catalog client
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Ok(Self::new(CatalogClient::new(config)?))
    }

    /// The full catalog, fetched on first use and cached for the session.
    ///
    /// Concurrent first calls share a single fetch. A failed fetch yields an
    /// empty catalog which is itself cached, so the bank does not hammer a
    /// broken host; call [`reset`](Self::reset) to try again.
    pub async fn get_all(&self) -> Arc<[Question]> {
        self.catalog
            .get_or_init(|| self.load_catalog())
            .await
            .clone()
    }

    async fn load_catalog(&self) -> Arc<[Question]> {
        match self.source.fetch_catalog().await {
            Ok(mut questions) => {
                // Normalization pass: entries without an explicit sub-category
                // get one derived from their compound category, so every later
                // read of the field sees the same value
                for question in &mut questions {
                    question.backfill_sub_category();
                }
                debug!(count = questions.len(), "Question catalog loaded");
                Arc::from(questions)
            }
            Err(err) => {
                error!(
                    kind = err.kind(),
                    error = %err,
                    "Failed to load question catalog, continuing with an empty catalog"
                );
                Arc::from(Vec::new())
            }
        }
    }

    /// The questions allowed by the player's selections, in catalog order.
    /// With no selections this hands back the cached catalog itself rather
    /// than a copy.
    pub async fn get_filtered(&self, settings: &Settings) -> Arc<[Question]> {
        let all = self.get_all().await;
        if settings.is_unrestricted() {
            return all;
        }
        Arc::from(filter::filter_questions(settings, &all))
    }

    /// A freshly shuffled round of the questions allowed by `settings`
    pub async fn get_shuffled(&self, settings: &Settings) -> Vec<Question> {
        let filtered = self.get_filtered(settings).await;
        shuffle::shuffle(&filtered)
    }

    /// Like [`get_shuffled`](Self::get_shuffled), but with a caller-supplied
    /// rng so the round order can be pinned
    pub async fn get_shuffled_with<R: rand::Rng + ?Sized>(
        &self,
        settings: &Settings,
        rng: &mut R,
    ) -> Vec<Question> {
        let filtered = self.get_filtered(settings).await;
        shuffle::shuffle_with(&filtered, rng)
    }

    /// Whether the catalog has already been fetched this session. True after
    /// a failed fetch too, since the empty result is cached.
    pub fn is_loaded(&self) -> bool {
        self.catalog.initialized()
    }

    /// Forget the cached catalog so the next access fetches again. Takes
    /// `&mut self`: resetting the session is an exclusive operation.
    pub fn reset(&mut self) {
        if self.catalog.take().is_some() {
            debug!("Question catalog cache cleared");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

use thiserror::Error;

/// Everything that can go wrong while fetching the question catalog.
///
/// Callers do not branch on the variant. Every kind maps to the same recovery
/// (continue with an empty catalog); the variant only decides what gets
/// logged.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to fetch question catalog: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog request returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Catalog payload type unsupported: {0}")]
    UnsupportedPayload(String),

    #[error("Failed to parse question catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl CatalogError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let truncated: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", truncated, body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        CatalogError::Http {
            status,
            body: Self::truncate_body(body),
        }
    }

    /// Stable tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Transport(_) => "transport",
            CatalogError::Http { .. } => "http",
            CatalogError::UnsupportedPayload(_) => "payload",
            CatalogError::Parse(_) => "parse",
        }
    }
}

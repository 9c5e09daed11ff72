// Clients for the two public APIs used by the search screens.
// Each call is a single request: no caching, no retry, no pagination.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::drug::DrugRecord;
use crate::models::encyclopedia::EncyclopediaSummary;

pub mod openfda;
pub mod wikipedia;

// Static sources for tests, available with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use openfda::OpenFdaClient;
pub use wikipedia::WikipediaClient;

/// Error type for external service calls
#[derive(Error, Debug)]
pub enum ExternalError {
    /// Transport-level failure (connection, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be decoded
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ExternalError {
    fn from(error: serde_json::Error) -> Self {
        ExternalError::Decode(error.to_string())
    }
}

/// Remote drug-label lookup by brand name
#[async_trait]
pub trait DrugLabelSource: Send + Sync {
    /// Search labels whose brand name matches the term.
    /// An empty vector means the service answered with no matches.
    async fn search_brand_name(&self, term: &str) -> Result<Vec<DrugRecord>, ExternalError>;
}

/// Remote encyclopedia page summaries
#[async_trait]
pub trait EncyclopediaSource: Send + Sync {
    /// Fetch the summary for a page title.
    /// `None` means the service answered but had no extract for the term.
    async fn page_summary(&self, term: &str) -> Result<Option<EncyclopediaSummary>, ExternalError>;
}

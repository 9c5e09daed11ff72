use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{EncyclopediaSource, ExternalError};
use crate::models::encyclopedia::EncyclopediaSummary;

/// Default base URL of the Wikipedia REST API
pub const DEFAULT_WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

/// Wikipedia page summary client
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    base_url: String,
    client: Client,
}

impl WikipediaClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str) -> Result<Self, ExternalError> {
        let client = Client::builder()
            .user_agent(concat!("med-guard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// URL of the summary endpoint for a term
    pub fn summary_url(&self, term: &str) -> String {
        format!("{}/page/summary/{}", self.base_url, urlencoding::encode(term))
    }
}

#[async_trait]
impl EncyclopediaSource for WikipediaClient {
    async fn page_summary(&self, term: &str) -> Result<Option<EncyclopediaSummary>, ExternalError> {
        let url = self.summary_url(term);
        debug!("Querying encyclopedia API: {}", url);

        let body = self.client.get(&url).send().await?.text().await?;
        parse_summary_response(term, &body)
    }
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    title: Option<String>,
    extract: Option<String>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    page: Option<String>,
}

/// Decode a summary body. Bodies without a non-empty extract
/// (missing pages, disambiguation errors) decode to `None`.
pub fn parse_summary_response(
    term: &str,
    body: &str,
) -> Result<Option<EncyclopediaSummary>, ExternalError> {
    let response: SummaryResponse = serde_json::from_str(body)?;

    let extract = match response.extract {
        Some(extract) if !extract.is_empty() => extract,
        _ => return Ok(None),
    };

    Ok(Some(EncyclopediaSummary {
        title: response.title.unwrap_or_else(|| term.to_string()),
        extract,
        page_url: response
            .content_urls
            .and_then(|urls| urls.desktop)
            .and_then(|desktop| desktop.page),
    }))
}

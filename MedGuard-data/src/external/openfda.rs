use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{DrugLabelSource, ExternalError};
use crate::models::drug::DrugRecord;

/// Default base URL of the openFDA API
pub const DEFAULT_OPENFDA_BASE_URL: &str = "https://api.fda.gov";

/// Maximum number of labels requested per search
pub const LABEL_RESULT_LIMIT: usize = 10;

/// openFDA drug label client
#[derive(Debug, Clone)]
pub struct OpenFdaClient {
    base_url: String,
    client: Client,
}

impl OpenFdaClient {
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

    /// URL of a brand-name label search; only the term is percent-encoded
    pub fn label_search_url(&self, term: &str) -> String {
        format!(
            "{}/drug/label.json?search=openfda.brand_name:{}&limit={}",
            self.base_url,
            urlencoding::encode(term),
            LABEL_RESULT_LIMIT
        )
    }
}

#[async_trait]
impl DrugLabelSource for OpenFdaClient {
    async fn search_brand_name(&self, term: &str) -> Result<Vec<DrugRecord>, ExternalError> {
        let url = self.label_search_url(term);
        debug!("Querying drug label API: {}", url);

        // openFDA answers "no matches" with a 404 and a JSON error body,
        // so the status is not checked; the body decides.
        let body = self.client.get(&url).send().await?.text().await?;
        parse_label_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct LabelResponse {
    #[serde(default)]
    results: Vec<Label>,
}

#[derive(Debug, Deserialize)]
struct Label {
    openfda: Option<OpenFdaFields>,
    description: Option<Vec<String>>,
    indications_and_usage: Option<Vec<String>>,
    adverse_reactions: Option<Vec<String>>,
    dosage_and_administration: Option<Vec<String>>,
    warnings: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenFdaFields {
    brand_name: Option<Vec<String>>,
    product_type: Option<Vec<String>>,
}

fn first_or(values: Option<Vec<String>>, placeholder: &str) -> String {
    values
        .and_then(|v| v.into_iter().next())
        .unwrap_or_else(|| placeholder.to_string())
}

fn list_or(values: Option<Vec<String>>, placeholder: &str) -> Vec<String> {
    match values {
        Some(v) if !v.is_empty() => v,
        _ => vec![placeholder.to_string()],
    }
}

impl Label {
    fn into_record(self, index: usize) -> DrugRecord {
        let openfda = self.openfda.unwrap_or_default();

        DrugRecord {
            id: format!("api-{}", index),
            name: first_or(openfda.brand_name, "Unknown"),
            description: first_or(self.description, "No description available."),
            category: first_or(openfda.product_type, "Unknown"),
            used_for: list_or(self.indications_and_usage, "No usage info."),
            side_effects: list_or(self.adverse_reactions, "No side effect info."),
            dosage: first_or(self.dosage_and_administration, "No dosage info."),
            warnings: list_or(self.warnings, "No warnings."),
        }
    }
}

/// Decode a label search body into drug records.
/// A body without `results` decodes to an empty list.
pub fn parse_label_response(body: &str) -> Result<Vec<DrugRecord>, ExternalError> {
    let response: LabelResponse = serde_json::from_str(body)?;

    Ok(response
        .results
        .into_iter()
        .enumerate()
        .map(|(index, label)| label.into_record(index))
        .collect())
}

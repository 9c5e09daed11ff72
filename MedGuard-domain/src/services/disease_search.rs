use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use med_guard_data::external::EncyclopediaSource;

use crate::entities::conversions::convert_to_domain_disease;
use crate::entities::disease::DiseaseLookupOutcome;
use crate::entities::notice::Notice;
use crate::services::search::SearchError;

fn not_found() -> DiseaseLookupOutcome {
    DiseaseLookupOutcome {
        result: None,
        notice: Notice::destructive(
            "No results found",
            "Try searching with different terms or symptoms",
        ),
    }
}

/// Trait for disease lookups
#[async_trait]
pub trait DiseaseSearchServiceTrait: Send + Sync {
    async fn lookup(&self, term: &str) -> Result<DiseaseLookupOutcome, SearchError>;
}

/// Disease lookup backed by encyclopedia summaries
pub struct DiseaseSearchService {
    source: Arc<dyn EncyclopediaSource>,
}

impl DiseaseSearchService {
    pub fn new(source: Arc<dyn EncyclopediaSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl DiseaseSearchServiceTrait for DiseaseSearchService {
    #[instrument(skip(self))]
    async fn lookup(&self, term: &str) -> Result<DiseaseLookupOutcome, SearchError> {
        if term.trim().is_empty() {
            return Err(SearchError::MissingDiseaseName);
        }

        match self.source.page_summary(term).await {
            Ok(Some(summary)) => {
                let disease = convert_to_domain_disease(summary);
                info!(title = %disease.name, "Encyclopedia summary found");
                let notice = Notice::info(
                    "Found on Wikipedia",
                    format!("Showing summary for \"{}\"", disease.name),
                );
                Ok(DiseaseLookupOutcome {
                    result: Some(disease),
                    notice,
                })
            }
            Ok(None) => {
                info!("No encyclopedia summary");
                Ok(not_found())
            }
            Err(e) => {
                warn!(error = %e, "Encyclopedia lookup failed");
                Ok(not_found())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use med_guard_data::external::mock::StaticEncyclopedia;
    use med_guard_data::models::encyclopedia::EncyclopediaSummary;

    #[tokio::test]
    async fn test_found_summary() {
        let source = Arc::new(StaticEncyclopedia::with_summary(EncyclopediaSummary {
            title: "Malaria".to_string(),
            extract: "Malaria is a mosquito-borne infectious disease.".to_string(),
            page_url: Some("https://en.wikipedia.org/wiki/Malaria".to_string()),
        }));
        let outcome = DiseaseSearchService::new(source).lookup("malaria").await.unwrap();

        let result = outcome.result.unwrap();
        assert_eq!(result.id, "wiki");
        assert_eq!(result.name, "Malaria");
        assert_eq!(outcome.notice.title, "Found on Wikipedia");
        assert_eq!(outcome.notice.description, "Showing summary for \"Malaria\"");
    }

    #[tokio::test]
    async fn test_missing_and_failing_sources_read_as_not_found() {
        for source in [StaticEncyclopedia::empty(), StaticEncyclopedia::failing()] {
            let outcome = DiseaseSearchService::new(Arc::new(source))
                .lookup("xyzzy")
                .await
                .unwrap();
            assert!(outcome.result.is_none());
            assert_eq!(outcome.notice.title, "No results found");
        }
    }

    #[tokio::test]
    async fn test_blank_term_is_rejected() {
        let source = Arc::new(StaticEncyclopedia::empty());
        let err = DiseaseSearchService::new(source.clone()).lookup("").await.unwrap_err();

        assert_eq!(err, SearchError::MissingDiseaseName);
        assert_eq!(err.notice().description, "Please enter a disease name to search");
        assert_eq!(source.call_count(), 0);
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use med_guard_data::catalog::DrugCatalog;
use med_guard_data::external::DrugLabelSource;

use crate::entities::conversions::convert_to_domain_drug;
use crate::entities::drug::{Drug, DrugSearchOrigin, DrugSearchOutcome};
use crate::entities::notice::Notice;
use crate::services::search::SearchError;

/// Trait for drug search operations
#[async_trait]
pub trait DrugSearchServiceTrait: Send + Sync {
    /// Search the local table, then the label API when nothing matched locally
    async fn search(&self, term: &str) -> Result<DrugSearchOutcome, SearchError>;
}

/// Two-stage drug resolver
pub struct DrugSearchService {
    catalog: DrugCatalog,
    remote: Arc<dyn DrugLabelSource>,
}

impl DrugSearchService {
    pub fn new(catalog: DrugCatalog, remote: Arc<dyn DrugLabelSource>) -> Self {
        Self { catalog, remote }
    }

    fn found(results: Vec<Drug>, origin: DrugSearchOrigin) -> DrugSearchOutcome {
        let notice = Notice::info(
            "Search Complete",
            format!(
                "Found {} matching medications ({})",
                results.len(),
                origin.tag()
            ),
        );
        DrugSearchOutcome {
            results,
            origin: Some(origin),
            notice,
        }
    }

    fn empty(notice: Notice) -> DrugSearchOutcome {
        DrugSearchOutcome {
            results: Vec::new(),
            origin: None,
            notice,
        }
    }
}

#[async_trait]
impl DrugSearchServiceTrait for DrugSearchService {
    #[instrument(skip(self))]
    async fn search(&self, term: &str) -> Result<DrugSearchOutcome, SearchError> {
        if term.trim().is_empty() {
            return Err(SearchError::MissingDrugName);
        }

        let local = self.catalog.search_by_name(term);
        if !local.is_empty() {
            info!(count = local.len(), "Drug search answered locally");
            let results = local.into_iter().map(convert_to_domain_drug).collect();
            return Ok(Self::found(results, DrugSearchOrigin::Local));
        }

        match self.remote.search_brand_name(term).await {
            Ok(records) if records.is_empty() => {
                info!("No drug labels matched");
                Ok(Self::empty(Notice::destructive(
                    "No results found",
                    "Try searching with a different term",
                )))
            }
            Ok(records) => {
                info!(count = records.len(), "Drug search answered by label API");
                let results = records.into_iter().map(convert_to_domain_drug).collect();
                Ok(Self::found(results, DrugSearchOrigin::Remote))
            }
            Err(e) => {
                warn!(error = %e, "Drug label lookup failed");
                Ok(Self::empty(Notice::destructive(
                    "API Error",
                    "Could not fetch data from the API.",
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use med_guard_data::external::mock::StaticDrugLabelSource;
    use med_guard_data::models::drug::DrugRecord;

    fn label(name: &str) -> DrugRecord {
        DrugRecord {
            id: "api-0".to_string(),
            name: name.to_string(),
            description: "No description available.".to_string(),
            category: "HUMAN OTC DRUG".to_string(),
            used_for: vec!["No usage info.".to_string()],
            side_effects: vec!["No side effect info.".to_string()],
            dosage: "No dosage info.".to_string(),
            warnings: vec!["No warnings.".to_string()],
        }
    }

    fn service(remote: Arc<StaticDrugLabelSource>) -> DrugSearchService {
        DrugSearchService::new(DrugCatalog::builtin(), remote)
    }

    #[tokio::test]
    async fn test_blank_term_is_rejected() {
        let remote = Arc::new(StaticDrugLabelSource::empty());
        let result = service(remote.clone()).search("   ").await;

        assert_eq!(result.unwrap_err(), SearchError::MissingDrugName);
        assert_eq!(remote.call_count(), 0);
    }

    #[tokio::test]
    async fn test_local_match_skips_remote() {
        let remote = Arc::new(StaticDrugLabelSource::with_records(vec![label("Tylenol")]));
        let outcome = service(remote.clone()).search("ASP").await.unwrap();

        assert_eq!(outcome.origin, Some(DrugSearchOrigin::Local));
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].name, "Aspirin");
        assert_eq!(outcome.notice.description, "Found 1 matching medications (local)");
        assert_eq!(remote.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_local_match_calls_remote_once() {
        let remote = Arc::new(StaticDrugLabelSource::with_records(vec![label("Tylenol")]));
        let outcome = service(remote.clone()).search("tylenol").await.unwrap();

        assert_eq!(remote.call_count(), 1);
        assert_eq!(outcome.origin, Some(DrugSearchOrigin::Remote));
        assert_eq!(outcome.notice.title, "Search Complete");
        assert_eq!(outcome.notice.description, "Found 1 matching medications (API)");
    }

    #[tokio::test]
    async fn test_remote_without_results() {
        let remote = Arc::new(StaticDrugLabelSource::empty());
        let outcome = service(remote.clone()).search("zzz").await.unwrap();

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.origin, None);
        assert_eq!(outcome.notice.title, "No results found");
        assert!(outcome.notice.is_destructive());
    }

    #[tokio::test]
    async fn test_remote_failure_degrades_to_notice() {
        let remote = Arc::new(StaticDrugLabelSource::failing());
        let outcome = service(remote.clone()).search("zzz").await.unwrap();

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.notice.title, "API Error");
        assert_eq!(remote.call_count(), 1);
    }
}

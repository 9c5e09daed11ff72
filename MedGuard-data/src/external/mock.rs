// Static stand-ins for the external sources.
// They record how often they were called so callers can assert on fallback order.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{DrugLabelSource, EncyclopediaSource, ExternalError};
use crate::models::drug::DrugRecord;
use crate::models::encyclopedia::EncyclopediaSummary;

/// Drug label source answering from a fixed list
#[derive(Debug, Default)]
pub struct StaticDrugLabelSource {
    records: Vec<DrugRecord>,
    fail: bool,
    calls: AtomicUsize,
}

impl StaticDrugLabelSource {
    /// Source that answers every search with these records
    pub fn with_records(records: Vec<DrugRecord>) -> Self {
        Self {
            records,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Source that answers every search with no matches
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Source whose every call fails like an unreachable service
    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of searches received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DrugLabelSource for StaticDrugLabelSource {
    async fn search_brand_name(&self, _term: &str) -> Result<Vec<DrugRecord>, ExternalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ExternalError::Decode("service unreachable".to_string()));
        }
        Ok(self.records.clone())
    }
}

/// Encyclopedia source answering with a fixed summary
#[derive(Debug, Default)]
pub struct StaticEncyclopedia {
    summary: Option<EncyclopediaSummary>,
    fail: bool,
    calls: AtomicUsize,
}

impl StaticEncyclopedia {
    /// Source that answers every lookup with this summary
    pub fn with_summary(summary: EncyclopediaSummary) -> Self {
        Self {
            summary: Some(summary),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Source that never has an extract
    pub fn empty() -> Self {
        Self::default()
    }

    /// Source whose every call fails
    pub fn failing() -> Self {
        Self {
            summary: None,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EncyclopediaSource for StaticEncyclopedia {
    async fn page_summary(&self, _term: &str) -> Result<Option<EncyclopediaSummary>, ExternalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ExternalError::Decode("service unreachable".to_string()));
        }
        Ok(self.summary.clone())
    }
}

// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

// Re-export the static external sources from the data layer
pub use med_guard_data::external::mock::{StaticDrugLabelSource, StaticEncyclopedia};
pub use med_guard_data::models::drug::DrugRecord;
pub use med_guard_data::models::encyclopedia::EncyclopediaSummary;

use crate::entities::scan::{ImageMeta, ScanDetails, Verdict};
use crate::health::{
    overall_status, ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth,
};
use crate::services::authenticity::AuthenticityOracle;

/// Oracle that always returns the same verdict and counts its calls
#[derive(Debug)]
pub struct FixedOracle {
    verdict: Verdict,
    calls: AtomicUsize,
}

impl FixedOracle {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
        }
    }

    /// Oracle that judges everything genuine
    pub fn authentic() -> Self {
        Self::new(sample_verdict(true))
    }

    /// Oracle that judges everything counterfeit
    pub fn counterfeit() -> Self {
        Self::new(sample_verdict(false))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthenticityOracle for FixedOracle {
    async fn assess(&self, _image: &ImageMeta) -> Verdict {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verdict.clone()
    }
}

/// A plausible verdict with fixed packaging details
pub fn sample_verdict(authentic: bool) -> Verdict {
    Verdict {
        authentic,
        confidence: 90,
        details: ScanDetails {
            manufacturer: "PharmaCorp Inc.".to_string(),
            batch_number: "BC1234".to_string(),
            expiry_date: "2025-12-31".to_string(),
            serial_number: "SN12345".to_string(),
        },
    }
}

/// A remote drug-label record with the given brand name
pub fn sample_label(name: &str) -> DrugRecord {
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

/// Mock health service with configurable component statuses
#[derive(Debug, Default)]
pub struct MockHealthService {
    components: HashMap<String, HealthComponent>,
}

impl MockHealthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a component
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components
            .insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = self.components.clone();
        components
            .entry("api".to_string())
            .or_insert_with(|| HealthComponent::healthy(None));

        SystemHealth {
            status: overall_status(&components),
            components,
        }
    }
}

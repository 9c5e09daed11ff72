//! Domain layer health check functionality
//! This module reports on the parts of the system the screens depend on

use std::collections::HashMap;

use async_trait::async_trait;

use med_guard_data::catalog::DrugCatalog;

use crate::config::AppConfig;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    pub status: ComponentStatus,
    pub details: Option<String>,
}

impl HealthComponent {
    pub fn healthy(details: Option<String>) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            details,
        }
    }
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Worst status across all components
pub fn overall_status(components: &HashMap<String, HealthComponent>) -> SystemStatus {
    if components
        .values()
        .any(|c| c.status == ComponentStatus::Unhealthy)
    {
        SystemStatus::Unhealthy
    } else if components
        .values()
        .any(|c| c.status == ComponentStatus::Degraded)
    {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Health service that inspects local state only.
/// The external APIs are reported by their configured base URL and never probed.
#[derive(Debug, Clone)]
pub struct DefaultHealthService {
    drug_catalog_size: usize,
    openfda_base_url: String,
    wikipedia_base_url: String,
}

impl DefaultHealthService {
    pub fn new(config: &AppConfig, catalog: &DrugCatalog) -> Self {
        Self {
            drug_catalog_size: catalog.all().len(),
            openfda_base_url: config.openfda_base_url.clone(),
            wikipedia_base_url: config.wikipedia_base_url.clone(),
        }
    }
}

#[async_trait]
impl HealthServiceTrait for DefaultHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert("api".to_string(), HealthComponent::healthy(None));

        // An empty table still works; every search just goes remote
        let catalog = if self.drug_catalog_size > 0 {
            HealthComponent::healthy(Some(format!("{} local entries", self.drug_catalog_size)))
        } else {
            HealthComponent {
                status: ComponentStatus::Degraded,
                details: Some("Local drug table is empty".to_string()),
            }
        };
        components.insert("drug_catalog".to_string(), catalog);

        components.insert(
            "drug_labels".to_string(),
            HealthComponent::healthy(Some(self.openfda_base_url.clone())),
        );
        components.insert(
            "encyclopedia".to_string(),
            HealthComponent::healthy(Some(self.wikipedia_base_url.clone())),
        );

        SystemHealth {
            status: overall_status(&components),
            components,
        }
    }
}

use std::sync::Arc;

use med_guard_data::catalog::DrugCatalog;
use med_guard_data::external::{
    DrugLabelSource, EncyclopediaSource, ExternalError, OpenFdaClient, WikipediaClient,
};
use med_guard_domain::config::AppConfig;
use med_guard_domain::health::{DefaultHealthService, HealthServiceTrait};
use med_guard_domain::services::{
    AuthenticityOracle, DiseaseSearchService, DiseaseSearchServiceTrait, DrugSearchService,
    DrugSearchServiceTrait, MetricsService, MetricsServiceTrait, PillIdentifierService,
    PillIdentifierServiceTrait, RandomOracle, ReminderService, ReminderServiceTrait,
    ScannerService, ScannerServiceTrait, SimulatedPillAnalyzer,
};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub metrics: Arc<dyn MetricsServiceTrait>,
    pub reminders: Arc<dyn ReminderServiceTrait>,
    pub drug_search: Arc<dyn DrugSearchServiceTrait>,
    pub disease_search: Arc<dyn DiseaseSearchServiceTrait>,
    pub pills: Arc<dyn PillIdentifierServiceTrait>,
    pub scanner: Arc<dyn ScannerServiceTrait>,
    pub health: Arc<dyn HealthServiceTrait>,
}

impl AppState {
    /// Wire every service around the given external sources and oracle
    pub fn new(
        config: AppConfig,
        drug_labels: Arc<dyn DrugLabelSource>,
        encyclopedia: Arc<dyn EncyclopediaSource>,
        oracle: Arc<dyn AuthenticityOracle>,
    ) -> Self {
        let catalog = DrugCatalog::builtin();
        let latency = config.latency;

        Self {
            health: Arc::new(DefaultHealthService::new(&config, &catalog)),
            metrics: Arc::new(MetricsService::new(latency.metrics_save)),
            reminders: Arc::new(ReminderService::new()),
            drug_search: Arc::new(DrugSearchService::new(catalog, drug_labels)),
            disease_search: Arc::new(DiseaseSearchService::new(encyclopedia)),
            pills: Arc::new(PillIdentifierService::new(
                latency.pill_search,
                Arc::new(SimulatedPillAnalyzer::new(latency.pill_image_analysis)),
            )),
            scanner: Arc::new(ScannerService::new(oracle)),
            config: Arc::new(config),
        }
    }

    /// Production wiring: real HTTP clients and the random oracle
    pub fn from_config(config: AppConfig) -> Result<Self, ExternalError> {
        let drug_labels = Arc::new(OpenFdaClient::new(&config.openfda_base_url)?);
        let encyclopedia = Arc::new(WikipediaClient::new(&config.wikipedia_base_url)?);
        let oracle = Arc::new(RandomOracle::new(config.latency.authenticity_scan));

        Ok(Self::new(config, drug_labels, encyclopedia, oracle))
    }
}

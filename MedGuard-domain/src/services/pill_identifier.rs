use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use med_guard_data::catalog::mock_pill_matches;

use crate::entities::conversions::convert_to_domain_pill;
use crate::entities::notice::Notice;
use crate::entities::pill::{
    PillImageAnalysis, PillMatch, PillSearchCriteria, PillSearchOutcome, PillShape,
};
use crate::entities::scan::ImageUpload;
use crate::validation::describe_validation_errors;

/// Pill identifier errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PillError {
    /// No colour, shape or imprint given
    #[error("Please provide at least one search criteria")]
    MissingCriteria,

    /// Upload body is empty
    #[error("Please select an image to analyze")]
    NoImage,

    /// Upload is not an image
    #[error("Please upload an image file")]
    InvalidFileType,
}

impl PillError {
    pub fn notice(&self) -> Notice {
        let title = match self {
            PillError::MissingCriteria => "Missing Information",
            PillError::NoImage => "No image selected",
            PillError::InvalidFileType => "Invalid file type",
        };
        Notice::destructive(title, self.to_string())
    }
}

/// Extracts search criteria from a pill photo
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PillImageAnalyzer: Send + Sync {
    async fn analyze(&self, image: &ImageUpload) -> PillSearchCriteria;
}

/// Analyzer that always reads a white round tablet imprinted ABC123
#[derive(Debug, Clone)]
pub struct SimulatedPillAnalyzer {
    latency: Duration,
}

impl SimulatedPillAnalyzer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PillImageAnalyzer for SimulatedPillAnalyzer {
    async fn analyze(&self, image: &ImageUpload) -> PillSearchCriteria {
        debug!(bytes = image.data.len(), "Analyzing pill image");
        tokio::time::sleep(self.latency).await;

        PillSearchCriteria {
            color: Some("White".to_string()),
            shape: Some(PillShape::Round),
            imprint: Some("ABC123".to_string()),
        }
    }
}

/// Trait for pill identification
#[async_trait]
pub trait PillIdentifierServiceTrait: Send + Sync {
    /// Search the pill catalogue by visual characteristics
    async fn identify(&self, criteria: PillSearchCriteria) -> Result<PillSearchOutcome, PillError>;

    /// Extract search criteria from a photo
    async fn analyze_image(&self, image: ImageUpload) -> Result<PillImageAnalysis, PillError>;
}

pub struct PillIdentifierService {
    search_latency: Duration,
    analyzer: Arc<dyn PillImageAnalyzer>,
}

impl PillIdentifierService {
    pub fn new(search_latency: Duration, analyzer: Arc<dyn PillImageAnalyzer>) -> Self {
        Self {
            search_latency,
            analyzer,
        }
    }
}

#[async_trait]
impl PillIdentifierServiceTrait for PillIdentifierService {
    #[instrument(skip(self))]
    async fn identify(&self, criteria: PillSearchCriteria) -> Result<PillSearchOutcome, PillError> {
        if let Err(errors) = criteria.validate() {
            warn!(errors = ?describe_validation_errors(&errors), "Pill search rejected");
            return Err(PillError::MissingCriteria);
        }

        tokio::time::sleep(self.search_latency).await;

        // The catalogue is a fixed sample; criteria do not narrow it
        let matches: Vec<PillMatch> = mock_pill_matches()
            .into_iter()
            .map(convert_to_domain_pill)
            .collect();

        info!(count = matches.len(), "Pill search complete");
        let notice = Notice::info(
            "Search Complete",
            format!("Found {} matching medications", matches.len()),
        );
        Ok(PillSearchOutcome { matches, notice })
    }

    #[instrument(skip(self, image), fields(content_type = %image.content_type))]
    async fn analyze_image(&self, image: ImageUpload) -> Result<PillImageAnalysis, PillError> {
        if image.data.is_empty() {
            return Err(PillError::NoImage);
        }
        if !image.content_type.trim().to_ascii_lowercase().starts_with("image/") {
            return Err(PillError::InvalidFileType);
        }

        let criteria = self.analyzer.analyze(&image).await;
        info!("Pill image analyzed");

        Ok(PillImageAnalysis {
            criteria,
            notice: Notice::info(
                "Image Analysis Complete",
                "Pill details have been extracted from the image",
            ),
        })
    }
}

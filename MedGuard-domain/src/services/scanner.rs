use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use med_guard_data::catalog::scan_history;

use crate::entities::conversions::convert_to_domain_scan_history;
use crate::entities::notice::Notice;
use crate::entities::scan::{
    ImageMeta, ImageUpload, ScanAction, ScanHistoryEntry, ScanOutcome, ScanResult, ScannerSnapshot,
};
use crate::services::authenticity::AuthenticityOracle;

/// Largest accepted upload, inclusive
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Content types the scanner accepts
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Counterfeit scanner errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("Please select an image to scan")]
    NoImage,

    #[error("Please upload an image file (JPEG, PNG, GIF, or WebP)")]
    InvalidFileType,

    #[error("Please upload an image smaller than 5MB")]
    FileTooLarge,

    #[error("No scan result is available")]
    NoResult,

    #[error("Unknown action '{0}'")]
    UnknownAction(String),
}

impl ScanError {
    pub fn notice(&self) -> Notice {
        let title = match self {
            ScanError::NoImage => "No image selected",
            ScanError::InvalidFileType => "Invalid file type",
            ScanError::FileTooLarge => "File too large",
            ScanError::NoResult => "No scan result",
            ScanError::UnknownAction(_) => "Unknown action",
        };
        Notice::destructive(title, self.to_string())
    }
}

fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Check an upload before it is scanned. The type is checked before the size.
pub fn validate_image(upload: &ImageUpload) -> Result<(), ScanError> {
    if upload.data.is_empty() {
        return Err(ScanError::NoImage);
    }
    if !ACCEPTED_IMAGE_TYPES.contains(&media_type(&upload.content_type).as_str()) {
        return Err(ScanError::InvalidFileType);
    }
    if upload.data.len() > MAX_IMAGE_BYTES {
        return Err(ScanError::FileTooLarge);
    }
    Ok(())
}

/// Actions accepted by the scanner session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerAction {
    ImageSelected(ImageMeta),
    ScanCompleted(ScanResult),
    Cleared,
}

/// The selected image and the result of scanning it
#[derive(Debug, Clone, Default)]
pub struct ScannerSession {
    image: Option<ImageMeta>,
    result: Option<ScanResult>,
}

impl ScannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageMeta> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    /// Apply an action. Returns true when the session changed.
    ///
    /// A completed scan only lands if it belongs to the image currently
    /// selected; results for replaced or cleared images are dropped.
    pub fn apply(&mut self, action: ScannerAction) -> bool {
        match action {
            ScannerAction::ImageSelected(meta) => {
                self.image = Some(meta);
                self.result = None;
                true
            }
            ScannerAction::ScanCompleted(result) => {
                if self.image.as_ref().map(|image| image.id) != Some(result.id) {
                    return false;
                }
                self.result = Some(result);
                true
            }
            ScannerAction::Cleared => {
                let changed = self.image.is_some() || self.result.is_some();
                self.image = None;
                self.result = None;
                changed
            }
        }
    }

    pub fn snapshot(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            image: self.image.clone(),
            result: self.result.clone(),
        }
    }
}

/// Trait for counterfeit scanner operations
#[async_trait]
pub trait ScannerServiceTrait: Send + Sync {
    /// Validate an upload, select it and run the oracle on it
    async fn scan(&self, upload: ImageUpload) -> Result<ScanOutcome, ScanError>;

    /// Result of the last completed scan
    fn latest(&self) -> Option<ScanResult>;

    /// Current image and result
    fn snapshot(&self) -> ScannerSnapshot;

    /// Drop the image and its result. Returns false if nothing was selected.
    fn clear(&self) -> bool;

    /// Follow-up action on the current result
    fn perform_action(&self, action: ScanAction) -> Result<Notice, ScanError>;

    /// Past scans
    fn history(&self) -> Vec<ScanHistoryEntry>;
}

pub struct ScannerService {
    oracle: Arc<dyn AuthenticityOracle>,
    session: RwLock<ScannerSession>,
}

impl ScannerService {
    pub fn new(oracle: Arc<dyn AuthenticityOracle>) -> Self {
        Self {
            oracle,
            session: RwLock::new(ScannerSession::new()),
        }
    }

    fn read_session(&self) -> RwLockReadGuard<'_, ScannerSession> {
        self.session.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_session(&self) -> RwLockWriteGuard<'_, ScannerSession> {
        self.session.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ScannerServiceTrait for ScannerService {
    #[instrument(skip(self, upload), fields(content_type = %upload.content_type, bytes = upload.data.len()))]
    async fn scan(&self, upload: ImageUpload) -> Result<ScanOutcome, ScanError> {
        if let Err(e) = validate_image(&upload) {
            warn!(error = %e, "Image rejected");
            return Err(e);
        }

        let meta = ImageMeta {
            id: Uuid::new_v4(),
            content_type: media_type(&upload.content_type),
            size_bytes: upload.data.len(),
        };
        self.write_session()
            .apply(ScannerAction::ImageSelected(meta.clone()));

        let verdict = self.oracle.assess(&meta).await;
        let result = ScanResult::from_verdict(meta.id, verdict);

        if !self
            .write_session()
            .apply(ScannerAction::ScanCompleted(result.clone()))
        {
            debug!(image_id = %meta.id, "Image replaced before its scan finished");
        }

        info!(authentic = result.authentic, confidence = result.confidence, "Scan complete");
        Ok(ScanOutcome {
            notice: result.notice(),
            result,
        })
    }

    fn latest(&self) -> Option<ScanResult> {
        self.read_session().result().cloned()
    }

    fn snapshot(&self) -> ScannerSnapshot {
        self.read_session().snapshot()
    }

    fn clear(&self) -> bool {
        self.write_session().apply(ScannerAction::Cleared)
    }

    fn perform_action(&self, action: ScanAction) -> Result<Notice, ScanError> {
        if self.read_session().result().is_none() {
            return Err(ScanError::NoResult);
        }
        info!(?action, "Scan result action");
        Ok(action.notice())
    }

    fn history(&self) -> Vec<ScanHistoryEntry> {
        scan_history()
            .into_iter()
            .map(convert_to_domain_scan_history)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::scan::{ScanDetails, Verdict};
    use crate::services::authenticity::MockAuthenticityOracle;

    fn verdict(authentic: bool) -> Verdict {
        Verdict {
            authentic,
            confidence: 91,
            details: ScanDetails {
                manufacturer: "PharmaCorp Inc.".to_string(),
                batch_number: "BC42".to_string(),
                expiry_date: "2025-12-31".to_string(),
                serial_number: "SN4242".to_string(),
            },
        }
    }

    fn meta() -> ImageMeta {
        ImageMeta {
            id: Uuid::new_v4(),
            content_type: "image/png".to_string(),
            size_bytes: 10,
        }
    }

    #[test]
    fn test_image_intake_rules() {
        assert_eq!(
            validate_image(&ImageUpload::new("text/plain", vec![0; 10])),
            Err(ScanError::InvalidFileType)
        );
        assert_eq!(
            validate_image(&ImageUpload::new("image/png", vec![0; MAX_IMAGE_BYTES + 1])),
            Err(ScanError::FileTooLarge)
        );
        assert_eq!(
            validate_image(&ImageUpload::new("image/jpeg", vec![0; MAX_IMAGE_BYTES])),
            Ok(())
        );
        assert_eq!(
            validate_image(&ImageUpload::new("image/png", Vec::new())),
            Err(ScanError::NoImage)
        );
    }

    #[test]
    fn test_type_is_checked_before_size() {
        let upload = ImageUpload::new("image/bmp", vec![0; MAX_IMAGE_BYTES + 1]);
        assert_eq!(validate_image(&upload), Err(ScanError::InvalidFileType));
    }

    #[test]
    fn test_content_type_parameters_are_ignored() {
        let upload = ImageUpload::new("Image/WebP; q=0.9", vec![0; 4]);
        assert_eq!(validate_image(&upload), Ok(()));
    }

    #[test]
    fn test_selecting_an_image_drops_previous_result() {
        let mut session = ScannerSession::new();
        let first = meta();
        session.apply(ScannerAction::ImageSelected(first.clone()));
        assert!(session.apply(ScannerAction::ScanCompleted(ScanResult::from_verdict(
            first.id,
            verdict(true)
        ))));
        assert!(session.result().is_some());

        session.apply(ScannerAction::ImageSelected(meta()));
        assert!(session.result().is_none());
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut session = ScannerSession::new();
        let first = meta();
        session.apply(ScannerAction::ImageSelected(first.clone()));
        session.apply(ScannerAction::ImageSelected(meta()));

        let stale = ScanResult::from_verdict(first.id, verdict(false));
        assert!(!session.apply(ScannerAction::ScanCompleted(stale)));
        assert!(session.result().is_none());
    }

    #[test]
    fn test_clear() {
        let mut session = ScannerSession::new();
        assert!(!session.apply(ScannerAction::Cleared));

        session.apply(ScannerAction::ImageSelected(meta()));
        assert!(session.apply(ScannerAction::Cleared));
        assert_eq!(session.snapshot(), ScannerSnapshot::default());
    }

    #[tokio::test]
    async fn test_scan_records_result() {
        let mut oracle = MockAuthenticityOracle::new();
        oracle.expect_assess().times(1).returning(|_| verdict(true));
        let service = ScannerService::new(Arc::new(oracle));

        let outcome = service
            .scan(ImageUpload::new("image/png", vec![1, 2, 3]))
            .await
            .unwrap();

        assert!(outcome.result.authentic);
        assert_eq!(outcome.notice.title, "Authentication Successful");
        assert_eq!(service.latest(), Some(outcome.result.clone()));
        assert_eq!(service.snapshot().image.map(|i| i.size_bytes), Some(3));
    }

    #[tokio::test]
    async fn test_counterfeit_notice_is_destructive() {
        let mut oracle = MockAuthenticityOracle::new();
        oracle.expect_assess().returning(|_| verdict(false));
        let service = ScannerService::new(Arc::new(oracle));

        let outcome = service
            .scan(ImageUpload::new("image/jpeg", vec![1]))
            .await
            .unwrap();

        assert_eq!(outcome.notice.title, "Warning: Potential Counterfeit Detected");
        assert!(outcome.notice.is_destructive());
    }

    #[tokio::test]
    async fn test_rejected_upload_never_reaches_oracle() {
        let mut oracle = MockAuthenticityOracle::new();
        oracle.expect_assess().times(0);
        let service = ScannerService::new(Arc::new(oracle));

        let err = service
            .scan(ImageUpload::new("text/plain", vec![1]))
            .await
            .unwrap_err();

        assert_eq!(err.notice().title, "Invalid file type");
        assert!(service.latest().is_none());
    }

    #[tokio::test]
    async fn test_actions_need_a_result() {
        let mut oracle = MockAuthenticityOracle::new();
        oracle.expect_assess().returning(|_| verdict(false));
        let service = ScannerService::new(Arc::new(oracle));

        assert_eq!(service.perform_action(ScanAction::Share), Err(ScanError::NoResult));

        service
            .scan(ImageUpload::new("image/gif", vec![1]))
            .await
            .unwrap();
        let notice = service.perform_action(ScanAction::Report).unwrap();
        assert_eq!(notice.title, "Report Submitted");

        assert!(service.clear());
        assert!(service.latest().is_none());
    }

    #[test]
    fn test_history_is_static() {
        let service = ScannerService::new(Arc::new(MockAuthenticityOracle::new()));
        let history = service.history();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].medicine_name, "Paracetamol 500mg");
        assert!(history[0].authentic);
        assert!(!history[1].authentic);
    }
}

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::notice::Notice;

/// Raw image bytes as uploaded, with their declared content type
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn new(content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            data,
        }
    }
}

/// An accepted image, as held by the scanner session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ImageMeta {
    pub id: Uuid,
    pub content_type: String,
    pub size_bytes: usize,
}

/// Packaging details reported by the oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ScanDetails {
    pub manufacturer: String,
    pub batch_number: String,
    pub expiry_date: String,
    pub serial_number: String,
}

/// Authenticity verdict for one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Verdict {
    pub authentic: bool,

    /// Confidence percentage
    pub confidence: u8,

    pub details: ScanDetails,
}

/// Verdict attached to the image it was produced for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ScanResult {
    /// Id of the scanned image
    pub id: Uuid,
    pub authentic: bool,
    pub confidence: u8,
    pub details: ScanDetails,
    pub scanned_at: DateTime<Utc>,
}

impl ScanResult {
    pub fn from_verdict(image_id: Uuid, verdict: Verdict) -> Self {
        Self {
            id: image_id,
            authentic: verdict.authentic,
            confidence: verdict.confidence,
            details: verdict.details,
            scanned_at: Utc::now(),
        }
    }

    /// Notice shown once the scan finishes
    pub fn notice(&self) -> Notice {
        if self.authentic {
            Notice::info(
                "Authentication Successful",
                "The medicine appears to be genuine and from an authorized manufacturer.",
            )
        } else {
            Notice::destructive(
                "Warning: Potential Counterfeit Detected",
                "This medicine shows signs of being counterfeit. Please verify with your healthcare provider.",
            )
        }
    }
}

/// Answer to a counterfeit scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ScanOutcome {
    pub result: ScanResult,
    pub notice: Notice,
}

/// Follow-up actions offered on a scan result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ScanAction {
    Share,
    Download,
    Report,
}

impl ScanAction {
    pub fn notice(self) -> Notice {
        match self {
            ScanAction::Share => {
                Notice::info("Share Results", "Sharing functionality will be available soon.")
            }
            ScanAction::Download => {
                Notice::info("Download Report", "Report download feature will be available soon.")
            }
            ScanAction::Report => Notice::info(
                "Report Submitted",
                "Thank you for reporting this counterfeit medicine. Authorities have been notified.",
            ),
        }
    }
}

impl FromStr for ScanAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "share" => Ok(ScanAction::Share),
            "download" => Ok(ScanAction::Download),
            "report" => Ok(ScanAction::Report),
            other => Err(format!("unknown scan action '{}'", other)),
        }
    }
}

/// A past scan in the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ScanHistoryEntry {
    pub id: u32,
    pub medicine_name: String,
    pub authentic: bool,
    pub scan_date: String,
}

/// Current image and result of the scanner session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ScannerSnapshot {
    pub image: Option<ImageMeta>,
    pub result: Option<ScanResult>,
}

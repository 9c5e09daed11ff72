use serde::{Deserialize, Serialize};

/// Storage model for a past counterfeit scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanHistoryRecord {
    pub id: u32,

    /// Name and strength of the scanned medicine
    pub medicine_name: String,

    /// Whether the scan judged the medicine authentic
    pub authentic: bool,

    /// When the scan happened, as displayed
    pub scan_date: String,
}

use serde::{Deserialize, Serialize};

/// Storage model for a pill identifier match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub manufacturer: String,
}

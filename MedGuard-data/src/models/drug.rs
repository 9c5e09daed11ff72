use serde::{Deserialize, Serialize};

/// Storage model for a drug entry, either from the local table or a label lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecord {
    /// Identifier, numeric for local entries and `api-{n}` for remote ones
    pub id: String,

    /// Brand or common name
    pub name: String,

    /// Short description
    pub description: String,

    /// Drug class or product type
    pub category: String,

    /// Indications
    pub used_for: Vec<String>,

    /// Known adverse reactions
    pub side_effects: Vec<String>,

    /// Dosage and administration
    pub dosage: String,

    /// Warnings
    pub warnings: Vec<String>,
}

use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::notice::Notice;

/// Where a drug search answer came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DrugSearchOrigin {
    /// Built-in table
    Local,
    /// Drug label API
    Remote,
}

impl DrugSearchOrigin {
    /// Tag shown in the result notice
    pub fn tag(self) -> &'static str {
        match self {
            DrugSearchOrigin::Local => "local",
            DrugSearchOrigin::Remote => "API",
        }
    }
}

/// A medication entry as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Drug {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub used_for: Vec<String>,
    pub side_effects: Vec<String>,
    pub dosage: String,
    pub warnings: Vec<String>,
}

/// Answer to a drug search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DrugSearchOutcome {
    /// Matching medications, empty when nothing matched or the API failed
    pub results: Vec<Drug>,

    /// Which stage produced the results, absent when there are none
    pub origin: Option<DrugSearchOrigin>,

    pub notice: Notice,
}

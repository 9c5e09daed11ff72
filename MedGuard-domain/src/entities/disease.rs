use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::notice::Notice;

/// Identifier given to every encyclopedia-backed result
pub const ENCYCLOPEDIA_RESULT_ID: &str = "wiki";

/// Encyclopedia summary of a condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DiseaseSummary {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Link to the full article
    pub url: Option<String>,
}

/// Answer to a disease lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DiseaseLookupOutcome {
    pub result: Option<DiseaseSummary>,
    pub notice: Notice,
}

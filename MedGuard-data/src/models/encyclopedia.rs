use serde::{Deserialize, Serialize};

/// Summary of an encyclopedia page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncyclopediaSummary {
    /// Page title
    pub title: String,

    /// Plain-text extract of the page
    pub extract: String,

    /// Desktop URL of the full page
    pub page_url: Option<String>,
}

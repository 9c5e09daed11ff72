use thiserror::Error;

use crate::entities::notice::Notice;

/// Errors shared by the drug and disease searches
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The drug search term was blank
    #[error("Please enter a medicine name to search")]
    MissingDrugName,

    /// The disease search term was blank
    #[error("Please enter a disease name to search")]
    MissingDiseaseName,
}

impl SearchError {
    pub fn notice(&self) -> Notice {
        Notice::destructive("Search term required", self.to_string())
    }
}

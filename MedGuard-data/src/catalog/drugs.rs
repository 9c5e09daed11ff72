use once_cell::sync::Lazy;
use tracing::debug;

use crate::models::drug::DrugRecord;

/// Local drug table consulted before the remote label API
static LOCAL_DRUGS: Lazy<Vec<DrugRecord>> = Lazy::new(|| {
    vec![
        DrugRecord {
            id: "1".to_string(),
            name: "Aspirin".to_string(),
            description: "Pain reliever and fever reducer".to_string(),
            category: "NSAID".to_string(),
            used_for: vec![
                "Pain relief".to_string(),
                "Fever reduction".to_string(),
                "Anti-inflammatory".to_string(),
            ],
            side_effects: vec![
                "Stomach upset".to_string(),
                "Heartburn".to_string(),
                "Nausea".to_string(),
            ],
            dosage: "325-650mg every 4-6 hours".to_string(),
            warnings: vec![
                "Avoid if allergic to NSAIDs".to_string(),
                "Consult doctor if pregnant".to_string(),
            ],
        },
        DrugRecord {
            id: "2".to_string(),
            name: "Ibuprofen".to_string(),
            description: "Anti-inflammatory medication".to_string(),
            category: "NSAID".to_string(),
            used_for: vec![
                "Pain relief".to_string(),
                "Inflammation".to_string(),
                "Fever reduction".to_string(),
            ],
            side_effects: vec![
                "Stomach pain".to_string(),
                "Headache".to_string(),
                "Dizziness".to_string(),
            ],
            dosage: "200-400mg every 4-6 hours".to_string(),
            warnings: vec![
                "Do not exceed 1200mg per day".to_string(),
                "Take with food".to_string(),
            ],
        },
    ]
});

/// In-memory drug table with name search
#[derive(Debug, Clone)]
pub struct DrugCatalog {
    drugs: Vec<DrugRecord>,
}

impl Default for DrugCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DrugCatalog {
    /// The table shipped with the application
    pub fn builtin() -> Self {
        Self {
            drugs: LOCAL_DRUGS.clone(),
        }
    }

    /// A catalogue over arbitrary entries
    pub fn with_drugs(drugs: Vec<DrugRecord>) -> Self {
        Self { drugs }
    }

    /// All entries in table order
    pub fn all(&self) -> &[DrugRecord] {
        &self.drugs
    }

    /// Case-insensitive substring match against drug names
    pub fn search_by_name(&self, term: &str) -> Vec<DrugRecord> {
        let needle = term.to_lowercase();
        let matches: Vec<DrugRecord> = self
            .drugs
            .iter()
            .filter(|drug| drug.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        debug!("Local drug table matched {} entries for '{}'", matches.len(), term);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_two_entries() {
        let catalog = DrugCatalog::builtin();
        let names: Vec<&str> = catalog.all().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Aspirin", "Ibuprofen"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = DrugCatalog::builtin();

        let results = catalog.search_by_name("ASP");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Aspirin");

        let results = catalog.search_by_name("prof");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Ibuprofen");
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let catalog = DrugCatalog::builtin();
        assert!(catalog.search_by_name("metformin").is_empty());
    }

    #[test]
    fn test_single_letter_can_match_several() {
        // "i" appears in both names
        let catalog = DrugCatalog::builtin();
        assert_eq!(catalog.search_by_name("i").len(), 2);
    }
}

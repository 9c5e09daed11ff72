use crate::models::pill::PillRecord;

/// Fixed matches returned by the pill identifier, whatever the criteria
pub fn mock_pill_matches() -> Vec<PillRecord> {
    vec![
        PillRecord {
            id: 1,
            name: "Medication A".to_string(),
            description: "Round white tablet with imprint 'ABC123'".to_string(),
            dosage: "500mg".to_string(),
            manufacturer: "PharmaCorp".to_string(),
        },
        PillRecord {
            id: 2,
            name: "Medication B".to_string(),
            description: "Oval blue tablet with imprint 'XYZ789'".to_string(),
            dosage: "250mg".to_string(),
            manufacturer: "MediLabs".to_string(),
        },
    ]
}

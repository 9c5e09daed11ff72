use crate::models::scan::ScanHistoryRecord;

/// Static scan history shown on the "My Medicines" screen
pub fn scan_history() -> Vec<ScanHistoryRecord> {
    vec![
        ScanHistoryRecord {
            id: 1,
            medicine_name: "Paracetamol 500mg".to_string(),
            authentic: true,
            scan_date: "2025-04-30 14:30".to_string(),
        },
        ScanHistoryRecord {
            id: 2,
            medicine_name: "Amoxicillin 250mg".to_string(),
            authentic: false,
            scan_date: "2025-04-29 16:45".to_string(),
        },
    ]
}

// Conversions from data-layer records to domain entities.
// Functions follow the convert_to_domain_[entity] pattern.

use med_guard_data::models::drug::DrugRecord;
use med_guard_data::models::encyclopedia::EncyclopediaSummary;
use med_guard_data::models::pill::PillRecord;
use med_guard_data::models::scan::ScanHistoryRecord;

use crate::entities::disease::{DiseaseSummary, ENCYCLOPEDIA_RESULT_ID};
use crate::entities::drug::Drug;
use crate::entities::pill::PillMatch;
use crate::entities::scan::ScanHistoryEntry;

pub fn convert_to_domain_drug(record: DrugRecord) -> Drug {
    Drug {
        id: record.id,
        name: record.name,
        description: record.description,
        category: record.category,
        used_for: record.used_for,
        side_effects: record.side_effects,
        dosage: record.dosage,
        warnings: record.warnings,
    }
}

pub fn convert_to_domain_disease(summary: EncyclopediaSummary) -> DiseaseSummary {
    DiseaseSummary {
        id: ENCYCLOPEDIA_RESULT_ID.to_string(),
        name: summary.title,
        description: summary.extract,
        url: summary.page_url,
    }
}

pub fn convert_to_domain_pill(record: PillRecord) -> PillMatch {
    PillMatch {
        id: record.id,
        name: record.name,
        description: record.description,
        dosage: record.dosage,
        manufacturer: record.manufacturer,
    }
}

pub fn convert_to_domain_scan_history(record: ScanHistoryRecord) -> ScanHistoryEntry {
    ScanHistoryEntry {
        id: record.id,
        medicine_name: record.medicine_name,
        authentic: record.authentic,
        scan_date: record.scan_date,
    }
}

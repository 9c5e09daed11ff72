// Built-in reference data.
// None of this is persisted; every table is compiled into the binary.

pub mod drugs;
pub mod pills;
pub mod scans;

pub use drugs::DrugCatalog;
pub use pills::mock_pill_matches;
pub use scans::scan_history;

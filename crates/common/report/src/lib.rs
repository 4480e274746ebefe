pub mod summary;
pub mod writer;

pub const ATTESTATIONS_FILE_NAME: &str = "attestations.json";
pub const LATE_ATTESTATIONS_FILE_NAME: &str = "late_attestations.json";
pub const MISSED_ATTESTATIONS_FILE_NAME: &str = "missed_attestations.json";
pub const SUMMARY_FILE_NAME: &str = "summary.md";

// sipforge_core/src/domain.rs
use time::OffsetDateTime;

/// One physical file observed inside a package's object store.
#[derive(Clone, Debug, Default)]
pub struct FileRecord {
    pub size_bytes: u64,
    pub modified: Option<OffsetDateTime>,
    pub accessed: Option<OffsetDateTime>,
    pub changed: Option<OffsetDateTime>,
    pub created: Option<OffsetDateTime>,
}

/// One ranked format-identification result; an empty label means the
/// format could not be identified.
#[derive(Clone, Debug)]
pub struct FormatEntry {
    pub label: String,
}

/// Aggregate descriptive record for exactly one package directory.
#[derive(Clone, Debug)]
pub struct PackageSummary {
    pub file_count: u64,
    pub total_bytes: u64,
    pub earliest_date: String,
    pub latest_date: String,
    pub extent_statement: String,
    pub date_statement: String,
}

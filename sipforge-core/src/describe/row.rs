use super::extent::aggregate;
use super::scope::compose_scope_note;
use crate::domain::{FileRecord, FormatEntry};
use crate::policy::DatePolicy;

pub const COLUMNS: usize = 26;

/// Spreadsheet header, exact and order-preserving.
pub const CSV_HEADERS: [&str; COLUMNS] = [
    "Parent ID",
    "Identifier",
    "Title",
    "Archive Creator",
    "Date expression",
    "Date start",
    "Date end",
    "Level of description",
    "Extent and medium",
    "Scope and content",
    "Arrangement (optional)",
    "Accession number",
    "Appraisal, destruction, and scheduling information (optional)",
    "Name access points (optional)",
    "Geographic access points (optional)",
    "Conditions governing access (optional)",
    "Conditions governing reproduction (optional)",
    "Language of material (optional)",
    "Physical characteristics & technical requirements affecting use (optional)",
    "Finding aids (optional)",
    "Related units of description (optional)",
    "Archival history (optional)",
    "Immediate source of acquisition or transfer (optional)",
    "Archivists' note (optional)",
    "General note (optional)",
    "Description status",
];

/// One output row. Only the descriptive columns are populated; the
/// rest stay empty for manual archival enrichment downstream.
#[derive(Clone, Debug)]
pub struct DescriptiveRow {
    pub identifier: String,
    pub date_expression: String,
    pub date_start: String,
    pub date_end: String,
    pub level_of_description: String,
    pub extent_and_medium: String,
    pub scope_and_content: String,
}

impl DescriptiveRow {
    /// All 26 cells in header order.
    pub fn fields(&self) -> [&str; COLUMNS] {
        let mut out = [""; COLUMNS];
        out[1] = &self.identifier;
        out[4] = &self.date_expression;
        out[5] = &self.date_start;
        out[6] = &self.date_end;
        out[7] = &self.level_of_description;
        out[8] = &self.extent_and_medium;
        out[9] = &self.scope_and_content;
        out
    }
}

/// Assemble the descriptive row for one package from its file records
/// and ranked format entries. Pure transformation, no side effects.
pub fn build_row(
    package_name: &str,
    records: &[FileRecord],
    entries: &[FormatEntry],
    policy: DatePolicy,
) -> DescriptiveRow {
    let summary = aggregate(records, policy);
    let extent_is_empty = summary.extent_statement == "EMPTY";
    let scope = compose_scope_note(package_name, entries, extent_is_empty);
    DescriptiveRow {
        identifier: package_name.to_string(),
        date_expression: summary.date_statement,
        date_start: summary.earliest_date,
        date_end: summary.latest_date,
        level_of_description: "File".to_string(),
        extent_and_medium: summary.extent_statement,
        scope_and_content: scope,
    }
}

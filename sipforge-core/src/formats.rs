use crate::domain::FormatEntry;
use crate::error::{Result, SipError};
use crate::util::csvio;
use std::fs;
use std::path::Path;

/// How many ranked formats feed the scope note.
pub const TOP_FORMATS: usize = 5;

/// Read the ranked format-identification report for one package.
/// The header row is skipped; at most the top five rows are kept, one
/// entry per row from its leading column. A report that cannot be
/// read is a hard error naming the package, never an empty list.
pub fn read_report(path: &Path, package: &str) -> Result<Vec<FormatEntry>> {
    let content = fs::read_to_string(path).map_err(|e| SipError::FormatReport {
        package: package.to_string(),
        detail: format!("{}: {}", path.display(), e),
    })?;
    let entries = csvio::parse_records(&content)
        .into_iter()
        .skip(1)
        .take(TOP_FORMATS)
        .map(|row| FormatEntry {
            label: row.into_iter().next().unwrap_or_default(),
        })
        .collect();
    Ok(entries)
}

use crate::domain::FileRecord;
use crate::error::Result;
use std::fs::Metadata;
use std::path::Path;
use time::OffsetDateTime;
use walkdir::WalkDir;

/// Scan a package object store directly, taking sizes and timestamps
/// from filesystem metadata. Record source for packages that carry no
/// DFXML inventory.
pub fn scan_tree(root: &Path) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let md = entry
            .metadata()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        records.push(record_from(&md));
    }
    Ok(records)
}

fn record_from(md: &Metadata) -> FileRecord {
    FileRecord {
        size_bytes: md.len(),
        modified: md.modified().ok().map(OffsetDateTime::from),
        accessed: md.accessed().ok().map(OffsetDateTime::from),
        changed: None,
        created: md.created().ok().map(OffsetDateTime::from),
    }
}

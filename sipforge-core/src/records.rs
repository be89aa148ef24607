use crate::domain::FileRecord;
use crate::error::{Result, SipError};
use crate::inventory::{dfxml, walk};
use crate::layout::SipLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which collaborator output supplies a package's file records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordSource {
    /// The structured DFXML inventory written beside the package.
    #[default]
    Dfxml,
    /// A direct recursive walk of the package object store.
    Walk,
}

/// Collect the file records for one package directory.
pub fn collect_records(
    package: &Path,
    layout: SipLayout,
    source: RecordSource,
) -> Result<Vec<FileRecord>> {
    let name = package_name(package);
    match source {
        RecordSource::Dfxml => dfxml::read_inventory(&layout.inventory_path(package), &name),
        RecordSource::Walk => {
            let objects = layout.objects_dir(package);
            walk::scan_tree(&objects).map_err(|e| SipError::Inventory {
                package: name,
                detail: format!("walking {}: {}", objects.display(), e),
            })
        }
    }
}

/// A package is identified by its directory basename.
pub fn package_name(package: &Path) -> String {
    package
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| package.display().to_string())
}

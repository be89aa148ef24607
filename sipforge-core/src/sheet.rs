use crate::describe::row::{CSV_HEADERS, DescriptiveRow, build_row};
use crate::error::Result;
use crate::formats;
use crate::layout::SipLayout;
use crate::policy::DatePolicy;
use crate::records::{RecordSource, collect_records, package_name};
use crate::util::csvio;
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::info;

/// Knobs for one description run.
#[derive(Clone, Copy, Debug, Default)]
pub struct DescribeOptions {
    pub layout: SipLayout,
    pub source: RecordSource,
    pub policy: DatePolicy,
}

/// Output sheet held open for one write session. The handle is owned
/// here and closed on drop, on every exit path.
pub struct SheetWriter {
    out: File,
}

impl SheetWriter {
    /// Truncate `path` and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let mut out = File::create(path)?;
        csvio::write_record(&mut out, &CSV_HEADERS)?;
        Ok(Self { out })
    }

    /// Open `path` for appending; the header is written only when the
    /// sheet is new or empty, so repeated sessions never duplicate it.
    pub fn append(path: &Path) -> Result<Self> {
        let mut out = OpenOptions::new().create(true).append(true).open(path)?;
        if out.metadata()?.len() == 0 {
            csvio::write_record(&mut out, &CSV_HEADERS)?;
        }
        Ok(Self { out })
    }

    pub fn write_row(&mut self, row: &DescriptiveRow) -> Result<()> {
        csvio::write_record(&mut self.out, &row.fields())?;
        Ok(())
    }
}

/// Build the descriptive row for one package directory. The format
/// report is consulted only when the package holds files; a missing
/// report for a non-empty package propagates as an error rather than
/// producing a row indistinguishable from a legitimately empty one.
pub fn describe_package(package: &Path, opts: &DescribeOptions) -> Result<DescriptiveRow> {
    let name = package_name(package);
    let records = collect_records(package, opts.layout, opts.source)?;
    let entries = if records.is_empty() {
        Vec::new()
    } else {
        formats::read_report(&opts.layout.formats_path(package), &name)?
    };
    Ok(build_row(&name, &records, &entries, opts.policy))
}

/// Describe every package under `root`: one row per immediate child
/// directory, appended as each package finishes so an interrupted
/// batch still leaves valid partial output. Non-directory entries are
/// skipped. With `append` set, rows accumulate onto an existing sheet
/// instead of replacing it.
pub fn describe_tree(
    root: &Path,
    out: &Path,
    opts: &DescribeOptions,
    append: bool,
) -> Result<()> {
    let mut writer = if append {
        SheetWriter::append(out)?
    } else {
        SheetWriter::create(out)?
    };

    let mut children: Vec<_> = std::fs::read_dir(root)?.collect::<std::io::Result<Vec<_>>>()?;
    children.sort_by_key(|e| e.file_name());

    for child in children {
        let path = child.path();
        if !path.is_dir() {
            continue;
        }
        let row = describe_package(&path, opts)?;
        writer.write_row(&row)?;
        info!("described package {}", row.identifier);
    }
    Ok(())
}

use std::path::PathBuf;

use sipforge_core::error::Result;
use sipforge_core::layout::SipLayout;
use sipforge_core::policy::DatePolicy;
use sipforge_core::records::RecordSource;
use sipforge_core::{DescribeOptions, SheetWriter, describe_package, describe_tree};

fn options_from_args(bagged: bool, walk: bool, mac_times: bool) -> DescribeOptions {
    DescribeOptions {
        layout: if bagged {
            SipLayout::Bagged
        } else {
            SipLayout::Plain
        },
        source: if walk {
            RecordSource::Walk
        } else {
            RecordSource::Dfxml
        },
        policy: if mac_times {
            DatePolicy::EarliestMac
        } else {
            DatePolicy::ModifiedOnly
        },
    }
}

pub fn handle_describe(
    package: PathBuf,
    sheet: PathBuf,
    bagged: bool,
    walk: bool,
    mac_times: bool,
) -> Result<()> {
    let opts = options_from_args(bagged, walk, mac_times);
    // Open the sheet first so an unwritable output path fails the run
    // before any package work happens.
    let mut writer = SheetWriter::append(&sheet)?;
    let row = describe_package(&package, &opts)?;
    writer.write_row(&row)?;
    eprintln!(
        "describe: appended \"{}\" to {}",
        row.identifier,
        sheet.display()
    );
    Ok(())
}

pub fn handle_sheet(
    root: PathBuf,
    out: PathBuf,
    bagged: bool,
    walk: bool,
    mac_times: bool,
    append: bool,
) -> Result<()> {
    let opts = options_from_args(bagged, walk, mac_times);
    describe_tree(&root, &out, &opts, append)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping() {
        let defaults = options_from_args(false, false, false);
        assert_eq!(defaults.layout, SipLayout::Plain);
        assert_eq!(defaults.source, RecordSource::Dfxml);
        assert_eq!(defaults.policy, DatePolicy::ModifiedOnly);

        let all = options_from_args(true, true, true);
        assert_eq!(all.layout, SipLayout::Bagged);
        assert_eq!(all.source, RecordSource::Walk);
        assert_eq!(all.policy, DatePolicy::EarliestMac);
    }
}

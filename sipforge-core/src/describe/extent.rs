use super::size::format_size;
use crate::domain::{FileRecord, PackageSummary};
use crate::policy::DatePolicy;
use time::OffsetDateTime;
use time::macros::format_description;

/// Fold a package's file records into its descriptive summary: count,
/// total size, chronological date range and the derived extent and
/// date statements. Pure and deterministic for a given input.
pub fn aggregate(records: &[FileRecord], policy: DatePolicy) -> PackageSummary {
    let file_count = records.len() as u64;
    let total_bytes: u64 = records.iter().map(|r| r.size_bytes).sum();

    let mut earliest: Option<OffsetDateTime> = None;
    let mut latest: Option<OffsetDateTime> = None;
    for record in records {
        let (lo, hi) = range_candidates(record, policy);
        if let Some(t) = lo {
            earliest = Some(match earliest {
                Some(e) if e <= t => e,
                _ => t,
            });
        }
        if let Some(t) = hi {
            latest = Some(match latest {
                Some(l) if l >= t => l,
                _ => t,
            });
        }
    }

    // Records without usable timestamps contribute nothing to the
    // range; a package with files but no timestamps renders blank
    // bounds, an empty package renders the N/A sentinel.
    let (earliest_date, latest_date) = if file_count == 0 {
        ("N/A".to_string(), "N/A".to_string())
    } else {
        (render_date(earliest), render_date(latest))
    };

    let extent_statement = match file_count {
        0 => "EMPTY".to_string(),
        1 => format!("1 digital file ({})", format_size(total_bytes)),
        n => format!("{} digital files ({})", n, format_size(total_bytes)),
    };

    let start_year = year_of(&earliest_date);
    let end_year = year_of(&latest_date);
    let date_statement = if start_year == end_year {
        start_year.to_string()
    } else {
        format!("{} - {}", start_year, end_year)
    };

    PackageSummary {
        file_count,
        total_bytes,
        earliest_date,
        latest_date,
        extent_statement,
        date_statement,
    }
}

fn range_candidates(
    record: &FileRecord,
    policy: DatePolicy,
) -> (Option<OffsetDateTime>, Option<OffsetDateTime>) {
    match policy {
        DatePolicy::ModifiedOnly => (record.modified, record.modified),
        DatePolicy::EarliestMac => {
            let times = [
                record.modified,
                record.accessed,
                record.changed,
                record.created,
            ];
            let lo = times.iter().flatten().min().copied();
            let hi = times.iter().flatten().max().copied();
            (lo, hi)
        }
    }
}

fn render_date(t: Option<OffsetDateTime>) -> String {
    let fmt = format_description!("[year]-[month]-[day]");
    match t {
        Some(t) => t.format(&fmt).unwrap_or_default(),
        None => String::new(),
    }
}

/// First four characters of a rendered date; sentinels ("" and "N/A")
/// pass through unchanged.
fn year_of(date: &str) -> &str {
    date.get(..4).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn rec(size: u64, modified: Option<OffsetDateTime>) -> FileRecord {
        FileRecord {
            size_bytes: size,
            modified,
            ..FileRecord::default()
        }
    }

    #[test]
    fn test_empty_package() {
        let s = aggregate(&[], DatePolicy::ModifiedOnly);
        assert_eq!(s.file_count, 0);
        assert_eq!(s.total_bytes, 0);
        assert_eq!(s.extent_statement, "EMPTY");
        assert_eq!(s.earliest_date, "N/A");
        assert_eq!(s.latest_date, "N/A");
        assert_eq!(s.date_statement, "N/A");
    }

    #[test]
    fn test_single_file_single_year() {
        let s = aggregate(
            &[rec(2048, Some(datetime!(2020-05-01 09:30 UTC)))],
            DatePolicy::ModifiedOnly,
        );
        assert_eq!(s.extent_statement, "1 digital file (2 KB)");
        assert_eq!(s.earliest_date, "2020-05-01");
        assert_eq!(s.latest_date, "2020-05-01");
        assert_eq!(s.date_statement, "2020");
    }

    #[test]
    fn test_year_range() {
        let s = aggregate(
            &[
                rec(100, Some(datetime!(2018-06-15 0:00 UTC))),
                rec(200, Some(datetime!(2021-01-02 0:00 UTC))),
            ],
            DatePolicy::ModifiedOnly,
        );
        assert_eq!(s.file_count, 2);
        assert_eq!(s.total_bytes, 300);
        assert_eq!(s.earliest_date, "2018-06-15");
        assert_eq!(s.latest_date, "2021-01-02");
        assert_eq!(s.date_statement, "2018 - 2021");
    }

    #[test]
    fn test_no_usable_timestamps_render_blank() {
        let s = aggregate(&[rec(10, None), rec(20, None)], DatePolicy::ModifiedOnly);
        assert_eq!(s.extent_statement, "2 digital files (30 bytes)");
        assert_eq!(s.earliest_date, "");
        assert_eq!(s.latest_date, "");
        assert_eq!(s.date_statement, "");
    }

    #[test]
    fn test_absent_timestamp_does_not_shrink_range() {
        let s = aggregate(
            &[
                rec(1, None),
                rec(1, Some(datetime!(2019-03-05 0:00 UTC))),
                rec(1, Some(datetime!(2019-03-01 0:00 UTC))),
            ],
            DatePolicy::ModifiedOnly,
        );
        assert_eq!(s.earliest_date, "2019-03-01");
        assert_eq!(s.latest_date, "2019-03-05");
        assert_eq!(s.date_statement, "2019");
    }

    #[test]
    fn test_mac_policy_widens_range() {
        let mut r = rec(1, Some(datetime!(2020-06-01 0:00 UTC)));
        r.created = Some(datetime!(2018-01-01 0:00 UTC));

        let modified_only = aggregate(std::slice::from_ref(&r), DatePolicy::ModifiedOnly);
        assert_eq!(modified_only.date_statement, "2020");

        let all_times = aggregate(&[r], DatePolicy::EarliestMac);
        assert_eq!(all_times.earliest_date, "2018-01-01");
        assert_eq!(all_times.latest_date, "2020-06-01");
        assert_eq!(all_times.date_statement, "2018 - 2020");
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = vec![
            rec(5, Some(datetime!(2019-01-01 0:00 UTC))),
            rec(7, None),
        ];
        let a = aggregate(&records, DatePolicy::ModifiedOnly);
        let b = aggregate(&records, DatePolicy::ModifiedOnly);
        assert_eq!(a.extent_statement, b.extent_statement);
        assert_eq!(a.earliest_date, b.earliest_date);
        assert_eq!(a.latest_date, b.latest_date);
        assert_eq!(a.date_statement, b.date_statement);
    }
}

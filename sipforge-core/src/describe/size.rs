const UNITS: [&str; 9] = ["bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Render a byte count as a rounded human-readable magnitude, e.g.
/// `"4 KB"`. Zero renders as `"0 bytes"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 bytes".to_string();
    }
    let exp = ((bytes as f64).log(1024.0).floor() as usize).min(UNITS.len() - 1);
    let value = (bytes as f64 / 1024f64.powi(exp as i32)).round();
    format!("{} {}", value as u64, UNITS[exp])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_size(0), "0 bytes");
    }

    #[test]
    fn test_exact_units() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_rounds_to_nearest_unit_value() {
        assert_eq!(format_size(1500), "1 KB");
        assert_eq!(format_size(1536), "2 KB");
        assert_eq!(format_size(300), "300 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
    }
}

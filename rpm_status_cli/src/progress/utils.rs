//! Formatting helpers shared by the rendering surfaces

/// Format bytes as human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Whole percentage of `done` out of `total`, `100` for an empty total
pub fn format_percent(done: u64, total: u64) -> String {
    if total == 0 {
        return "100%".to_string();
    }
    let percent = (done.min(total) as u128 * 100) / total as u128;
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0, 10), "0%");
        assert_eq!(format_percent(6, 10), "60%");
        assert_eq!(format_percent(1, 3), "33%");
        assert_eq!(format_percent(10, 10), "100%");
        assert_eq!(format_percent(0, 0), "100%");
    }
}

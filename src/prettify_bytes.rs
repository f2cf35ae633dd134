const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Format bytes amount as a human-readable string
///
/// - `512` -> `512.00 B`
/// - `1536` -> `1.50 KB`
pub fn prettify_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size > 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{size:.2} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prettify() {
        assert_eq!(prettify_bytes(0), "0.00 B");
        assert_eq!(prettify_bytes(512), "512.00 B");

        // Exactly 1024 is not converted
        assert_eq!(prettify_bytes(1024), "1024.00 B");

        assert_eq!(prettify_bytes(1536), "1.50 KB");
        assert_eq!(prettify_bytes(3 * 1024 * 1024 * 1024), "3.00 GB");

        // No units above TB
        assert_eq!(prettify_bytes(2048 * 1024 * 1024 * 1024 * 1024), "2048.00 TB");
    }
}

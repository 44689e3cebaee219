const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Formats a byte count with 1024-based units.
///
/// Plain bytes are printed as an integer, everything larger with one decimal
/// place: `0 B`, `512 B`, `1.0 KB`, `1.5 KB`, `3.2 GB`.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut size = bytes as f64;
    let mut unit_idx = 0;
    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }
    // 1023.95 and up would print as "1024.0" of this unit.
    if (size * 10.0).round() >= 10240.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }
    format!("{:.1} {}", size, UNITS[unit_idx])
}

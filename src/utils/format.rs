//! Formatting utilities for display values.

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        // 999_950 and up would round to "1000.0K"
        Some(bytes) if bytes >= 999_950 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{}B", bytes),
    }
}

/// Count lines the way an editor would (a trailing newline does not start a new line).
pub fn line_count(text: &str) -> usize {
    text.lines().count()
}

//! Time utilities: epoch milliseconds and HH:MM:SS duration formatting.

use chrono::Local;

pub fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Format a duration in milliseconds as zero-padded HH:MM:SS, floored to
/// whole seconds. Hours are unbounded and may exceed 24. Negative input
/// is clamped to zero at this display boundary.
pub fn format_hms(ms: i64) -> String {
    let ms = ms.max(0);
    let total_seconds = ms / 1000;

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

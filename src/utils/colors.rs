/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colored presence badge for the status board and the admin report.
pub fn status_badge(present: bool) -> String {
    if present {
        format!("{GREEN}present{RESET}")
    } else {
        format!("{GREY}absent{RESET}")
    }
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Duration color for a sleep session:
/// under 5h → red, under 7h → yellow, otherwise green.
pub fn color_for_duration(minutes: i64) -> &'static str {
    if minutes < 5 * 60 {
        RED
    } else if minutes < 7 * 60 {
        YELLOW
    } else {
        GREEN
    }
}

/// Event kind coloring: falling asleep in cyan, waking up in green.
pub fn colorize_kind(value: &str, is_sleep: bool) -> String {
    if value.trim().is_empty() {
        return format!("{GREY}{value}{RESET}");
    }

    if is_sleep {
        format!("{CYAN}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}

//! Output formatting for CLI commands

use chrono::{DateTime, Local};
use serde::Serialize;

/// Pretty JSON for `--json`
pub fn format_output<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

/// Separator used when a multi-line message is folded onto the console line
const LINE_JOINER: &str = " | ";

/// `[HH:MM:SS] <title>: <message>` at the current local time
pub fn console_line(title: &str, message: &str) -> String {
    console_line_at(Local::now(), title, message)
}

/// Always a single line; message lines are folded with `" | "`
pub fn console_line_at(now: DateTime<Local>, title: &str, message: &str) -> String {
    format!(
        "[{}] {}: {}",
        now.format("%H:%M:%S"),
        single_line(title),
        single_line(message)
    )
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(LINE_JOINER)
}

//! Clock-face formatting for the stopwatch and timer displays

/// Format stopwatch time: `HH:MM:SS` once an hour has passed, `MM:SS.CC` before
pub fn format_stopwatch(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let (hours, minutes, seconds) = split_seconds(total_seconds);

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}.{:02}", minutes, seconds, (ms % 1000) / 10)
    }
}

/// Format timer time: `HH:MM:SS` or `MM:SS`. Negative values show as zero.
pub fn format_countdown(ms: i64) -> String {
    let total_seconds = (ms / 1000).max(0) as u64;
    let (hours, minutes, seconds) = split_seconds(total_seconds);

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

fn split_seconds(total_seconds: u64) -> (u64, u64, u64) {
    (
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60,
    )
}

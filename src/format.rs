//! Human-readable formatting for the summary fields.

use chrono::{LocalResult, TimeZone, Utc};

/// Placeholder used for every field the metadata does not provide.
pub const UNKNOWN: &str = "unknown";

const NANOSECONDS_IN_SECOND: f64 = 1e9;

/// Format a nanosecond duration the way `ros2 bag info` would read it:
/// whole hours and minutes above an hour, whole minutes and seconds
/// above a minute, one-decimal seconds below that.
pub fn human_duration(nanos: u64) -> String {
    let seconds = nanos as f64 / NANOSECONDS_IN_SECOND;

    if seconds >= 3600.0 {
        let whole = seconds as u64;
        format!("{}h {}m", whole / 3600, (whole % 3600) / 60)
    } else if seconds >= 60.0 {
        let whole = seconds as u64;
        format!("{}m {}s", whole / 60, whole % 60)
    } else {
        format!("{seconds:.1}s")
    }
}

/// Format nanoseconds since the Unix epoch as a UTC wall-clock time.
pub fn human_timestamp(nanos_since_epoch: u64) -> String {
    let seconds = (nanos_since_epoch / 1_000_000_000) as i64;
    let subsec = (nanos_since_epoch % 1_000_000_000) as u32;

    match Utc.timestamp_opt(seconds, subsec) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Format a byte count with binary scaling: whole bytes below 1 KB,
/// one decimal above, falling through to PB.
pub fn human_bytes(num_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    let mut value = num_bytes as f64;

    for (index, unit) in UNITS.iter().enumerate() {
        if value < 1024.0 {
            return if index == 0 {
                format!("{num_bytes} {unit}")
            } else {
                format!("{value:.1} {unit}")
            };
        }

        value /= 1024.0;
    }

    format!("{value:.1} PB")
}

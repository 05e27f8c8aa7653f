//! Rendering helpers shared by the `logbook` commands.

use chrono::TimeDelta;
use serde::Serialize;

use crate::error::Result;

/// Format a duration as hours, minutes and seconds, e.g. `2h0m0s`.
///
/// Leading zero units are dropped (`45m0s`, `7s`), zero is `0s`, and
/// negative durations get a leading `-`. Sub-second parts are truncated.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let secs = duration.num_seconds();
    if secs == 0 {
        return "0s".to_string();
    }

    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    let (hours, minutes, seconds) = (secs / 3600, secs / 60 % 60, secs % 60);

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}

/// Render any serializable value as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

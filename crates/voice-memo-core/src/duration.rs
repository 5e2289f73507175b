//! Display formatting for recording lengths.

/// Milliseconds per second.
const MILLIS_PER_SECOND: f64 = 1000.0;

/// Seconds per minute.
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Format a recording length as `M:SS`.
///
/// Minutes are never padded; seconds are padded to two digits. Seconds are
/// rounded to the nearest whole second and are NOT carried into the minute,
/// so a remainder of 59.6s renders as `M:60`.
///
/// ```
/// use voice_memo_core::format_duration;
///
/// assert_eq!(format_duration(65_000), "1:05");
/// assert_eq!(format_duration(119_600), "1:60");
/// ```
pub fn format_duration(duration_millis: u64) -> String {
    let minutes = duration_millis as f64 / MILLIS_PER_SECOND / SECONDS_PER_MINUTE;
    let whole_minutes = minutes.floor();
    let seconds = ((minutes - whole_minutes) * SECONDS_PER_MINUTE).round() as u64;

    format!("{}:{:02}", whole_minutes as u64, seconds)
}

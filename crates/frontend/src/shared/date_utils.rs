//! Utilities for date and time formatting

use chrono::{DateTime, Local, Utc};

/// Format a Unix timestamp (seconds, possibly fractional) in local time
/// Example: 1710511346.5 -> "15.03.2024 14:02:26" (for UTC+0)
pub fn format_unix_seconds(seconds: f64) -> Option<String> {
    format_unix_seconds_utc(seconds).map(|utc| {
        utc.with_timezone(&Local)
            .format("%d.%m.%Y %H:%M:%S")
            .to_string()
    })
}

fn format_unix_seconds_utc(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_seconds_to_utc() {
        let dt = format_unix_seconds_utc(1710511346.5).unwrap();
        assert_eq!(
            dt.format("%d.%m.%Y %H:%M:%S").to_string(),
            "15.03.2024 14:02:26"
        );
    }

    #[test]
    fn test_unix_seconds_rejects_nan() {
        assert!(format_unix_seconds(f64::NAN).is_none());
        assert!(format_unix_seconds(1710511346.0).is_some());
    }
}

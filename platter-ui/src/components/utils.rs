//! Utility functions for UI components

/// Format a playback time in seconds as `m:ss`.
///
/// Values that are not valid non-negative numbers (NaN, infinities,
/// negatives) render as the `-:--` placeholder, which doubles as the
/// display for a not-yet-reported duration.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "-:--".to_string();
    }
    let min = (seconds / 60.0).floor() as u64;
    let sec = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", min, sec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(599.0), "9:59");
    }

    #[test]
    fn fractional_seconds_floor() {
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(65.4), "1:05");
    }

    #[test]
    fn invalid_values_render_placeholder() {
        assert_eq!(format_time(-1.0), "-:--");
        assert_eq!(format_time(f64::NAN), "-:--");
        assert_eq!(format_time(f64::INFINITY), "-:--");
    }

    // Pins the minute rollover: an even minute renders as m+1:00, never
    // as the lower minute with ":00" (or a literal ":60").
    #[test]
    fn whole_minutes_carry_into_the_minute_field() {
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(119.9), "1:59");
        assert_eq!(format_time(120.0), "2:00");
    }
}

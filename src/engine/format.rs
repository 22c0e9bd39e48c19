//! Duration display formatting.
//!
//! Pure functions; which shape to use is the front-end's choice. The
//! TUI shows `HH:MM:SS`, the terminal loops show `MM:SS`.

/// Format seconds as `HH:MM:SS`, zero-padded.
///
/// Negative input is clamped to zero.
#[must_use]
pub fn format_hhmmss(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format seconds as `MM:SS`, zero-padded.
///
/// Negative input is clamped to zero.
#[must_use]
pub fn format_mmss(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    let minutes = secs / 60;
    let seconds = secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hhmmss() {
        assert_eq!(format_hhmmss(0), "00:00:00");
        assert_eq!(format_hhmmss(61), "00:01:01");
        assert_eq!(format_hhmmss(3600), "01:00:00");
        assert_eq!(format_hhmmss(3 * 3600 + 25 * 60 + 9), "03:25:09");
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(25 * 60), "25:00");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(format_hhmmss(-5), "00:00:00");
        assert_eq!(format_mmss(-5), "00:00");
    }
}

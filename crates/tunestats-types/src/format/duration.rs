const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;

/// Track length as `M:SS`. Minutes are never split into hours.
pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / MS_PER_SECOND;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Listening time as `Hh Mm`, or just `Mm` under an hour. Seconds are dropped.
pub fn format_duration_long(ms: u64) -> String {
    let total_minutes = ms / MS_PER_MINUTE;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(180000), "3:00");
        assert_eq!(format_duration(215000), "3:35");
        assert_eq!(format_duration(60000), "1:00");
        assert_eq!(format_duration(45000), "0:45");
    }

    #[test]
    fn test_format_duration_pads_seconds() {
        assert_eq!(format_duration(65000), "1:05");
        assert_eq!(format_duration(3000), "0:03");
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn test_format_duration_has_no_hours() {
        assert_eq!(format_duration(3_725_999), "62:05");
    }

    #[test]
    fn test_format_duration_components_add_up() {
        for ms in (0..7_300_000u64).step_by(997) {
            let text = format_duration(ms);
            let (minutes, seconds) = text.split_once(':').expect("separator");
            assert_eq!(seconds.len(), 2, "{text}");
            assert!(minutes == "0" || !minutes.starts_with('0'), "{text}");

            let minutes: u64 = minutes.parse().expect("minutes");
            let seconds: u64 = seconds.parse().expect("seconds");
            assert_eq!(minutes * 60 + seconds, ms / 1000);
        }
    }

    #[test]
    fn test_format_duration_long() {
        assert_eq!(format_duration_long(1800000), "30m");
        assert_eq!(format_duration_long(300000), "5m");
        assert_eq!(format_duration_long(5400000), "1h 30m");
        assert_eq!(format_duration_long(9000000), "2h 30m");
        assert_eq!(format_duration_long(0), "0m");
        assert_eq!(format_duration_long(3_600_000), "1h 0m");
    }
}

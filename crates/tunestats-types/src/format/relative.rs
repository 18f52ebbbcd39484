use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone};

use super::locale::{Locale, Polish};
use crate::error::TimestampError;

const MS_PER_MINUTE: i64 = 60_000;

/// Parse a play timestamp.
///
/// RFC 3339 with an offset is preferred. Timestamps without an offset
/// (the tracking store emits these) are read as local time.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Local>, TimestampError> {
    match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => Ok(dt.with_timezone(&Local)),
        Err(rfc_err) => {
            let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
                .map_err(|_| TimestampError::invalid(input, &rfc_err))?;
            Local
                .from_local_datetime(&naive)
                .earliest()
                .ok_or_else(|| TimestampError::invalid(input, &rfc_err))
        }
    }
}

/// How long ago `input` was, in Polish, measured against the wall clock.
pub fn format_relative_time(input: &str) -> Result<String, TimestampError> {
    let played_at = parse_timestamp(input)?;
    Ok(format_relative_time_since(&played_at, &Local::now(), &Polish))
}

/// How long before `now` the play at `played_at` happened.
///
/// Each unit is floored from the previous one (minutes, then hours, then
/// days), so exactly 60 minutes is "1 hour". Past a week the absolute date
/// in `played_at`'s time zone is shown instead. A timestamp after `now`
/// counts as "just now".
pub fn format_relative_time_since<Tz: TimeZone>(
    played_at: &DateTime<Tz>,
    now: &DateTime<Tz>,
    locale: &dyn Locale,
) -> String {
    let elapsed_ms = now.clone().signed_duration_since(played_at.clone()).num_milliseconds();
    let minutes = elapsed_ms.div_euclid(MS_PER_MINUTE);

    if minutes < 1 {
        return locale.just_now();
    }
    let minutes = minutes.unsigned_abs();
    if minutes < 60 {
        return locale.minutes_ago(minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return locale.hours_ago(hours);
    }
    let days = hours / 24;
    if days < 7 {
        return locale.days_ago(days);
    }

    locale.short_date(played_at.day(), played_at.month())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::format::English;
    use chrono::{Duration, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        let now = now();
        format_relative_time_since(&(now - delta), &now, &Polish)
    }

    #[test]
    fn test_just_now() {
        assert_eq!(ago(Duration::zero()), "Przed chwilą");
        assert_eq!(ago(Duration::seconds(59)), "Przed chwilą");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(Duration::seconds(60)), "1 min temu");
        assert_eq!(ago(Duration::minutes(30)), "30 min temu");
        assert_eq!(ago(Duration::seconds(59 * 60 + 59)), "59 min temu");
    }

    #[test]
    fn test_hours_start_at_sixty_minutes() {
        assert_eq!(ago(Duration::minutes(60)), "1 godzinę temu");
        assert_eq!(ago(Duration::hours(2)), "2 godziny temu");
        assert_eq!(ago(Duration::hours(5)), "5 godzin temu");
        assert_eq!(ago(Duration::minutes(24 * 60 - 1)), "23 godzin temu");
    }

    #[test]
    fn test_days() {
        assert_eq!(ago(Duration::hours(24)), "1 dzień temu");
        assert_eq!(ago(Duration::days(3)), "3 dni temu");
        assert_eq!(ago(Duration::days(7) - Duration::minutes(1)), "6 dni temu");
    }

    #[test]
    fn test_absolute_date_after_a_week() {
        // 2024-03-08T18:30Z
        assert_eq!(ago(Duration::days(7)), "8 mar");
        // 2023-12-25T18:30Z
        assert_eq!(ago(Duration::days(81)), "25 gru");
    }

    #[test]
    fn test_future_is_just_now() {
        assert_eq!(ago(-Duration::hours(3)), "Przed chwilą");
    }

    #[test]
    fn test_other_locale() {
        let now = now();
        let played = now - Duration::hours(1);
        assert_eq!(format_relative_time_since(&played, &now, &English), "1 hour ago");
    }

    #[test]
    fn test_format_relative_time_against_wall_clock() {
        let just_played = Utc::now().to_rfc3339();
        assert_eq!(format_relative_time(&just_played).unwrap(), "Przed chwilą");

        let half_hour = (Utc::now() - Duration::minutes(30)).to_rfc3339();
        assert_eq!(format_relative_time(&half_hour).unwrap(), "30 min temu");

        let two_hours = (Utc::now() - Duration::hours(2)).to_rfc3339();
        assert_eq!(format_relative_time(&two_hours).unwrap(), "2 godziny temu");

        let three_days = (Utc::now() - Duration::days(3)).to_rfc3339();
        assert_eq!(format_relative_time(&three_days).unwrap(), "3 dni temu");
    }

    #[test]
    fn test_parse_timestamp_without_offset() {
        let parsed = parse_timestamp("2024-03-01T12:00:00.123456").unwrap();
        assert_eq!(parsed.naive_local().to_string(), "2024-03-01 12:00:00.123456");
    }

    #[test]
    fn test_malformed_timestamp() {
        assert!(matches!(parse_timestamp("last tuesday"), Err(TimestampError::Invalid { .. })));
        assert!(format_relative_time("").is_err());
    }
}

//! Time utilities: duration formatting, local clock/date rendering, and
//! parsing of user-entered timestamps and work-day lengths.

use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
};

/// Shown wherever a timestamp or timer has no value.
pub const PLACEHOLDER: &str = "--:--:--";

/// Wire format used by the backend for plain local datetimes.
pub const BACKEND_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const LOCAL_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Which side of a range a user-entered bound belongs to.
/// A bare date expands to the start or the end of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// `HH:MM:SS`, zero-padded, hours uncapped. Negative input is floored to 0.
pub fn format_duration(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

pub fn format_clock_time(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_date(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Local `YYYY-MM-DD HH:MM:SS`, the format the backend filters on.
pub fn format_backend_datetime(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format(BACKEND_DATETIME_FORMAT)
        .to_string()
}

/// Local `YYYY-MM-DD HH:MM`, used when echoing filter bounds back to the user.
pub fn format_filter_bound(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Whole seconds from `start` to `end`, never negative.
pub fn whole_seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_seconds().max(0)
}

/// Interpret a naive wall-clock value in the local timezone.
pub fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Decode a timestamp coming from storage or from the backend.
///
/// Accepts RFC 3339 (`2025-06-02T08:00:00.000Z`) and the backend's local
/// `YYYY-MM-DD HH:MM:SS` rows.
pub fn parse_wire_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, BACKEND_DATETIME_FORMAT)
        .ok()
        .and_then(local_to_utc)
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// Parse a filter bound typed by the user.
///
/// Supported:
/// - RFC 3339
/// - YYYY-MM-DD HH:MM[:SS] / YYYY-MM-DDTHH:MM[:SS] (local time)
/// - YYYY-MM-DD (start or end of the local day, depending on `bound`)
pub fn parse_filter_bound(input: &str, bound: Bound) -> AppResult<DateTime<Utc>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in LOCAL_INPUT_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_to_utc(naive).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()));
        }
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;

    let time = match bound {
        Bound::Start => NaiveTime::from_hms_opt(0, 0, 0),
        Bound::End => NaiveTime::from_hms_opt(23, 59, 59),
    }
    .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;

    local_to_utc(date.and_time(time)).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// Parse a work-day length such as `8h`, `7h30m`, `450m`, `27000s` or a bare
/// number of hours.
pub fn parse_work_day(input: &str) -> AppResult<TimeDelta> {
    let s = input.trim().to_ascii_lowercase();
    let invalid = || AppError::InvalidDuration(input.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    if let Ok(hours) = s.parse::<i64>() {
        return hours
            .checked_mul(3600)
            .and_then(positive)
            .ok_or_else(invalid);
    }

    let mut total: i64 = 0;
    let mut digits = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let value: i64 = digits.parse().map_err(|_| invalid())?;
        digits.clear();

        let factor = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid()),
        };
        total = value
            .checked_mul(factor)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(invalid)?;
    }

    if !digits.is_empty() {
        return Err(invalid());
    }

    positive(total).ok_or_else(invalid)
}

fn positive(seconds: i64) -> Option<TimeDelta> {
    if seconds > 0 {
        TimeDelta::try_seconds(seconds)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(100 * 3600 + 5), "100:00:05");
        assert_eq!(format_duration(-30), "00:00:00");
    }

    #[test]
    fn test_format_clock_time_and_date() {
        let ts = local(2025, 6, 2, 9, 5, 7);
        assert_eq!(format_clock_time(Some(ts)), "09:05:07");
        assert_eq!(format_date(Some(ts)), "2025-06-02");
        assert_eq!(format_backend_datetime(ts), "2025-06-02 09:05:07");
        assert_eq!(format_clock_time(None), PLACEHOLDER);
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_whole_seconds_between_floors() {
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();
        let end = start + TimeDelta::milliseconds(90_999);
        assert_eq!(whole_seconds_between(start, end), 90);
        assert_eq!(whole_seconds_between(end, start), 0);
    }

    #[test]
    fn test_parse_wire_timestamp() {
        let iso = parse_wire_timestamp("2025-06-02T08:00:00.000Z").unwrap();
        assert_eq!(iso, Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap());

        let backend = parse_wire_timestamp("2025-06-02 09:05:07").unwrap();
        assert_eq!(backend, local(2025, 6, 2, 9, 5, 7));

        assert!(matches!(
            parse_wire_timestamp("yesterday"),
            Err(AppError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_parse_filter_bound_formats() {
        let expected = local(2025, 6, 2, 9, 30, 0);
        assert_eq!(
            parse_filter_bound("2025-06-02 09:30", Bound::Start).unwrap(),
            expected
        );
        assert_eq!(
            parse_filter_bound("2025-06-02T09:30", Bound::End).unwrap(),
            expected
        );
        assert_eq!(
            parse_filter_bound("2025-06-02", Bound::Start).unwrap(),
            local(2025, 6, 2, 0, 0, 0)
        );
        assert_eq!(
            parse_filter_bound("2025-06-02", Bound::End).unwrap(),
            local(2025, 6, 2, 23, 59, 59)
        );
        assert!(parse_filter_bound("02/06/2025", Bound::Start).is_err());
    }

    #[test]
    fn test_parse_work_day() {
        assert_eq!(parse_work_day("8h").unwrap(), TimeDelta::hours(8));
        assert_eq!(parse_work_day("8").unwrap(), TimeDelta::hours(8));
        assert_eq!(parse_work_day("7h30m").unwrap(), TimeDelta::minutes(450));
        assert_eq!(parse_work_day("450m").unwrap(), TimeDelta::minutes(450));
        assert_eq!(parse_work_day("27000s").unwrap(), TimeDelta::seconds(27000));
        assert!(parse_work_day("").is_err());
        assert!(parse_work_day("0h").is_err());
        assert!(parse_work_day("8x").is_err());
        assert!(parse_work_day("8h30").is_err());
    }

    #[test]
    fn test_parse_work_day_rejects_out_of_range() {
        for input in ["9999999999999999", "9300000000000000s", "99999999999999999999h"] {
            assert!(matches!(
                parse_work_day(input),
                Err(AppError::InvalidDuration(_))
            ));
        }
    }
}

// Date utility functions
// UTC calendar arithmetic, weekday indexing and label formatting

use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

const DAY_SHORT_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    pub fn from_setting(value: &str) -> Self {
        if value == "24h" {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::TwelveHour => "%a, %b %-d at %-I:%M %p",
            Self::TwentyFourHour => "%a, %b %-d at %H:%M",
        }
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Midnight UTC on the given calendar date.
pub fn utc_date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

/// JavaScript-style `toISOString` rendering: `2026-01-05T19:00:00.000Z`.
pub fn to_iso_string(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Sunday-based weekday index (0 = Sunday).
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

pub fn day_short_label(day_of_week: u8) -> &'static str {
    DAY_SHORT_LABELS[(day_of_week % 7) as usize]
}

pub fn parse_timezone(name: &str) -> Option<Tz> {
    match name.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(err) => {
            log::warn!("Ignoring unknown timezone '{}': {}", name, err);
            None
        }
    }
}

/// Human-readable label for an instant in the display timezone (UTC when none).
pub fn format_label(instant: DateTime<Utc>, tz: Option<Tz>, time_format: TimeFormat) -> String {
    let zone = tz.unwrap_or(chrono_tz::UTC);
    instant
        .with_timezone(&zone)
        .format(time_format.pattern())
        .to_string()
}

/// Resolve a wall-clock time in `zone` to UTC, taking the earlier instant when
/// the local time is ambiguous. Returns `None` for times skipped by DST.
pub fn local_to_utc(naive: NaiveDateTime, zone: Tz) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a `datetime-local` style value (`YYYY-MM-DDTHH:MM`) entered in the
/// display timezone.
pub fn parse_local_datetime(value: &str, tz: Option<Tz>) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M:%S"))
        .map_err(|err| anyhow!("Invalid date/time '{}': {}", value, err))?;
    let zone = tz.unwrap_or(chrono_tz::UTC);
    local_to_utc(naive, zone)
        .ok_or_else(|| anyhow!("'{}' does not exist in timezone {}", value, zone.name()))
}

/// Next instant strictly after `now` that falls on `day_of_week` at `hour:00`
/// local time in `zone`.
pub fn next_weekly_instant(now: DateTime<Utc>, day_of_week: u8, hour: u8, zone: Tz) -> Option<DateTime<Utc>> {
    let local_now = now.with_timezone(&zone);
    let today = local_now.date_naive();
    let offset = (day_of_week as i64 - weekday_index(today.weekday()) as i64).rem_euclid(7);

    // Looking up to two weeks ahead covers an hour already passed today and a DST gap.
    (0..3)
        .map(|week| today + Duration::days(offset + week * 7))
        .filter_map(|date| date.and_hms_opt(hour as u32, 0, 0))
        .filter_map(|naive| local_to_utc(naive, zone))
        .find(|candidate| *candidate > now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_weekday_index_is_sunday_based() {
        assert_eq!(weekday_index(Weekday::Sun), 0);
        assert_eq!(weekday_index(Weekday::Sat), 6);
        assert_eq!(day_short_label(1), "Mon");
    }

    #[test]
    fn test_format_label_in_timezone() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 6, 1, 0, 0).unwrap();
        let tz = parse_timezone("America/New_York");
        assert_eq!(
            format_label(instant, tz, TimeFormat::TwelveHour),
            "Mon, Jan 5 at 8:00 PM"
        );
        assert_eq!(
            format_label(instant, None, TimeFormat::TwentyFourHour),
            "Tue, Jan 6 at 01:00"
        );
    }

    #[test]
    fn test_parse_local_datetime_converts_to_utc() {
        let tz = parse_timezone("Europe/Berlin");
        let parsed = parse_local_datetime("2026-07-01T20:00", tz).unwrap();
        assert_eq!(to_iso_string(parsed), "2026-07-01T18:00:00.000Z");
        assert!(parse_local_datetime("tomorrow", tz).is_err());
    }

    #[test]
    fn test_parse_local_datetime_rejects_dst_gap() {
        let tz = parse_timezone("America/New_York");
        assert!(parse_local_datetime("2026-03-08T02:30", tz).is_err());
    }

    #[test]
    fn test_next_weekly_instant() {
        // Monday 2026-01-05 12:00 UTC
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        let later_today = next_weekly_instant(now, 1, 19, chrono_tz::UTC).unwrap();
        assert_eq!(later_today, Utc.with_ymd_and_hms(2026, 1, 5, 19, 0, 0).unwrap());

        let passed = next_weekly_instant(now, 1, 9, chrono_tz::UTC).unwrap();
        assert_eq!(passed, Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap());

        let sunday = next_weekly_instant(now, 0, 18, chrono_tz::UTC).unwrap();
        assert_eq!(sunday, Utc.with_ymd_and_hms(2026, 1, 11, 18, 0, 0).unwrap());
    }
}

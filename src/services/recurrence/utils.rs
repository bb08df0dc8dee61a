use chrono::{DateTime, Datelike, Duration, Utc};

use crate::utils::date::days_in_month;

pub(super) fn advance_days(current: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    current + Duration::days(days)
}

/// Move to the next calendar month, keeping the time of day.
///
/// The day-of-month is anchored to `anchor_day` (the series' original day) and
/// clamped to the last day of the target month, so Jan 31 → Feb 28 → Mar 31.
pub(super) fn advance_month(current: DateTime<Utc>, anchor_day: u32) -> Option<DateTime<Utc>> {
    let new_month = current.month() + 1;
    let (year, month) = if new_month > 12 {
        (current.year() + 1, 1)
    } else {
        (current.year(), new_month)
    };

    let day = anchor_day.min(days_in_month(year, month));
    current
        .with_day(1)?
        .with_year(year)?
        .with_month(month)?
        .with_day(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_advance_month_clamps_short_month() {
        assert_eq!(advance_month(at(2026, 1, 31), 31), Some(at(2026, 2, 28)));
        assert_eq!(advance_month(at(2028, 1, 30), 30), Some(at(2028, 2, 29)));
    }

    #[test]
    fn test_advance_month_restores_anchor_day() {
        assert_eq!(advance_month(at(2026, 2, 28), 31), Some(at(2026, 3, 31)));
        assert_eq!(advance_month(at(2026, 3, 31), 31), Some(at(2026, 4, 30)));
    }

    #[test]
    fn test_advance_month_rolls_year() {
        assert_eq!(advance_month(at(2026, 12, 15), 15), Some(at(2027, 1, 15)));
    }

    #[test]
    fn test_advance_days_keeps_time_of_day() {
        assert_eq!(advance_days(at(2026, 3, 1), 14), at(2026, 3, 15));
    }
}

// Property-based tests for recurrence generation

use chrono::{Datelike, Duration};
use proptest::prelude::*;
use squad_scheduler::models::recurrence::Frequency;
use squad_scheduler::services::recurrence::{count_occurrences, generate, MAX_OCCURRENCES};
use squad_scheduler::utils::date::{days_in_month, utc_date};

proptest! {
    /// Property: weekly occurrences are always exactly 7 days apart
    #[test]
    fn prop_weekly_always_7_days_apart(
        year in 2020..2030i32,
        month in 1..=12u32,
        day in 1..=28u32,
        span in 0..800i64,
    ) {
        let start = utc_date(year, month, day).unwrap();
        let dates = generate(start, Frequency::Weekly, start + Duration::days(span));
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(7));
        }
    }

    /// Property: no frequency ever exceeds the 52 occurrence ceiling, and the
    /// last date never passes `until`
    #[test]
    fn prop_bounded_by_cap_and_until(
        year in 2020..2030i32,
        month in 1..=12u32,
        day in 1..=28u32,
        span in -30..2000i64,
        freq in prop_oneof![Just(Frequency::Weekly), Just(Frequency::Biweekly), Just(Frequency::Monthly)],
    ) {
        let start = utc_date(year, month, day).unwrap();
        let until = start + Duration::days(span);
        let dates = generate(start, freq, until);

        prop_assert!(!dates.is_empty());
        prop_assert!(dates.len() <= MAX_OCCURRENCES);
        prop_assert_eq!(dates[0], start);
        if dates.len() > 1 {
            prop_assert!(*dates.last().unwrap() <= until);
        }
        prop_assert_eq!(count_occurrences(start, freq, until), dates.len());
    }

    /// Property: monthly dates keep the start day whenever the month has it
    #[test]
    fn prop_monthly_day_is_anchored(
        year in 2020..2030i32,
        month in 1..=12u32,
        day in 1..=31u32,
    ) {
        prop_assume!(day <= days_in_month(year, month));
        let start = utc_date(year, month, day).unwrap();
        let dates = generate(start, Frequency::Monthly, start + Duration::days(400));

        for date in dates {
            let expected = day.min(days_in_month(date.year(), date.month()));
            prop_assert_eq!(date.day(), expected);
        }
    }
}

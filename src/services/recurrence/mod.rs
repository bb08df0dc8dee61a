// Recurrence generator
// Expands (start, frequency, until) into the bounded list of occurrence dates

use chrono::{DateTime, Datelike, Utc};

use crate::models::recurrence::Frequency;

mod utils;

use utils::{advance_days, advance_month};

/// Hard ceiling on generated occurrences, regardless of `until`.
pub const MAX_OCCURRENCES: usize = 52;

/// Generate occurrence instants in UTC calendar fields.
///
/// The first occurrence is always `start`. Generation stops once the next
/// candidate is strictly after `until` or [`MAX_OCCURRENCES`] have been
/// produced, so `until <= start` yields exactly one date.
pub fn generate(start: DateTime<Utc>, frequency: Frequency, until: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let anchor_day = start.day();
    let mut occurrences = vec![start];
    let mut current = start;

    while occurrences.len() < MAX_OCCURRENCES {
        let next = match frequency {
            Frequency::Weekly => Some(advance_days(current, 7)),
            Frequency::Biweekly => Some(advance_days(current, 14)),
            Frequency::Monthly => advance_month(current, anchor_day),
        };

        let Some(next) = next else {
            log::warn!("Recurrence from {} ran past the representable calendar", start);
            break;
        };

        if next > until {
            break;
        }

        occurrences.push(next);
        current = next;
    }

    log::debug!(
        "Generated {} {} occurrence(s) from {} until {}",
        occurrences.len(),
        frequency.as_str(),
        start,
        until
    );
    occurrences
}

/// Number of occurrences [`generate`] would produce, for form previews.
pub fn count_occurrences(start: DateTime<Utc>, frequency: Frequency, until: DateTime<Utc>) -> usize {
    generate(start, frequency, until).len()
}

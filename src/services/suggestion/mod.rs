//! Time-slot suggestions for event planning.
//!
//! Aggregation happens server-side; this module only turns per-candidate counts
//! into a stable ranking with display labels.

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::heatmap::HeatmapCell;
use crate::models::poll::PollOption;
use crate::models::settings::Settings;
use crate::utils::date::{format_label, local_to_utc, next_weekly_instant, TimeFormat};

/// Where the candidate counts came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum SuggestionSource {
    /// No aggregated data; candidates are ordered by time only.
    Fallback,
    /// Interest/availability counts of players who favour a game.
    #[serde(rename_all = "camelCase")]
    GameInterest { game_slug: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionCandidate {
    pub date: DateTime<Utc>,
    pub available_count: u32,
}

impl SuggestionCandidate {
    pub fn new(date: DateTime<Utc>, available_count: u32) -> Self {
        Self {
            date,
            available_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSuggestion {
    pub date: DateTime<Utc>,
    pub label: String,
    pub available_count: u32,
}

impl From<&TimeSuggestion> for PollOption {
    fn from(suggestion: &TimeSuggestion) -> Self {
        PollOption::from_instant(suggestion.date, suggestion.label.clone())
    }
}

#[derive(Debug, Clone)]
pub struct TimeSuggestionRanker {
    timezone: Option<Tz>,
    time_format: TimeFormat,
    limit: Option<usize>,
}

impl Default for TimeSuggestionRanker {
    fn default() -> Self {
        Self {
            timezone: None,
            time_format: TimeFormat::TwelveHour,
            limit: None,
        }
    }
}

impl TimeSuggestionRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            timezone: settings.timezone(),
            time_format: TimeFormat::from_setting(&settings.time_format),
            limit: Some(settings.suggestion_limit),
        }
    }

    pub fn with_timezone(mut self, timezone: Option<Tz>) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    /// Order candidates by count, highest first.
    ///
    /// The sort is stable: candidates with equal counts keep the order the
    /// caller supplied them in, which is soonest-first for the candidate
    /// builders below. Under [`SuggestionSource::Fallback`] every count is
    /// reported as zero and the result is sorted soonest-first. Repeated dates
    /// keep their best count.
    pub fn rank(&self, source: &SuggestionSource, candidates: &[SuggestionCandidate]) -> Vec<TimeSuggestion> {
        let mut ranked: Vec<SuggestionCandidate> = candidates
            .iter()
            .map(|candidate| match source {
                SuggestionSource::Fallback => SuggestionCandidate::new(candidate.date, 0),
                SuggestionSource::GameInterest { .. } => *candidate,
            })
            .collect();

        match source {
            SuggestionSource::Fallback => ranked.sort_by_key(|candidate| candidate.date),
            SuggestionSource::GameInterest { .. } => {
                ranked.sort_by_key(|candidate| Reverse(candidate.available_count))
            }
        }

        let mut seen = HashSet::new();
        ranked.retain(|candidate| seen.insert(candidate.date));

        if let Some(limit) = self.limit {
            ranked.truncate(limit);
        }

        if let SuggestionSource::GameInterest { game_slug } = source {
            log::debug!("Ranked {} suggestion(s) for game '{}'", ranked.len(), game_slug);
        }

        ranked
            .into_iter()
            .map(|candidate| TimeSuggestion {
                date: candidate.date,
                label: format_label(candidate.date, self.timezone, self.time_format),
                available_count: candidate.available_count,
            })
            .collect()
    }
}

/// Concrete upcoming instants for each heatmap cell with at least one player.
///
/// Cells are read as local day/hour in `timezone` (UTC when `None`). The
/// result is ordered soonest-first.
pub fn candidates_from_heatmap(
    cells: &[HeatmapCell],
    now: DateTime<Utc>,
    timezone: Option<Tz>,
) -> Vec<SuggestionCandidate> {
    let zone = timezone.unwrap_or(chrono_tz::UTC);
    let mut candidates = cells
        .iter()
        .filter(|cell| cell.available_count > 0 && cell.key().is_ok())
        .filter_map(|cell| {
            next_weekly_instant(now, cell.day_of_week, cell.hour, zone)
                .map(|date| SuggestionCandidate::new(date, cell.available_count))
        })
        .collect::<Vec<_>>();
    candidates.sort_by_key(|candidate| candidate.date);
    candidates
}

/// Upcoming `hours` (local, in `timezone`) over the next `days` days,
/// soonest-first.
pub fn fallback_candidates(
    now: DateTime<Utc>,
    days: u32,
    hours: &[u8],
    timezone: Option<Tz>,
) -> Vec<SuggestionCandidate> {
    let zone = timezone.unwrap_or(chrono_tz::UTC);
    let today = now.with_timezone(&zone).date_naive();

    let mut candidates = (0..days as i64)
        .map(|offset| today + Duration::days(offset))
        .flat_map(|date| hours.iter().filter_map(move |hour| date.and_hms_opt(*hour as u32, 0, 0)))
        .filter_map(|naive| local_to_utc(naive, zone))
        .filter(|date| *date > now)
        .map(|date| SuggestionCandidate::new(date, 0))
        .collect::<Vec<_>>();
    candidates.sort_by_key(|candidate| candidate.date);
    candidates
}

// Poll option module
// Candidate start times offered to voters when scheduling by community poll

use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::utils::date::{format_label, parse_local_datetime, to_iso_string, TimeFormat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    /// ISO-8601 instant. Identity of the option is this exact string.
    pub date: String,
    pub label: String,
}

impl PollOption {
    pub fn new(date: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            label: label.into(),
        }
    }

    pub fn from_instant(instant: DateTime<Utc>, label: impl Into<String>) -> Self {
        Self::new(to_iso_string(instant), label)
    }

    /// Manual entry of a custom time (`YYYY-MM-DDTHH:MM`) in the display timezone.
    pub fn custom(value: &str, timezone: Option<Tz>, time_format: TimeFormat) -> Result<Self> {
        let instant = parse_local_datetime(value, timezone)?;
        Ok(Self::from_instant(
            instant,
            format_label(instant, timezone, time_format),
        ))
    }
}

/// Ordered poll option list, unique by `date` string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollOptions(Vec<PollOption>);

impl PollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option. Returns false (and leaves the list untouched) when an
    /// option with the identical date string is already present.
    pub fn add(&mut self, option: PollOption) -> bool {
        if self.contains(&option.date) {
            log::debug!("Ignoring duplicate poll option {}", option.date);
            return false;
        }
        self.0.push(option);
        true
    }

    pub fn remove(&mut self, date: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|option| option.date != date);
        self.0.len() != before
    }

    pub fn contains(&self, date: &str) -> bool {
        self.0.iter().any(|option| option.date == date)
    }

    pub fn as_slice(&self) -> &[PollOption] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Recurrence module
// Repeat cadence for scheduled events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Every week",
            Self::Biweekly => "Every 2 weeks",
            Self::Monthly => "Every month",
        }
    }

}

/// Recurrence as entered on the event form. `until` stays optional here so the
/// form can report a missing end date before anything is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub until: Option<DateTime<Utc>>,
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency, until: DateTime<Utc>) -> Self {
        Self {
            frequency,
            until: Some(until),
        }
    }
}

// Form state module
// Serializable state of the event-planning / availability form, mutated only
// through named actions

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::block::PreviewBlock;
use crate::models::poll::{PollOption, PollOptions};
use crate::models::recurrence::RecurrenceRule;
use crate::models::slot::{Slot, HOURS_PER_DAY};
use crate::services::recurrence;
use crate::utils::date::weekday_index;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormAction {
    /// Whole-template replacement, as emitted by the paint controller.
    ReplaceSlots(Vec<Slot>),
    SetTitle(String),
    SetGame(Option<String>),
    SetStart(Option<DateTime<Utc>>),
    SetDuration(u8),
    SetRecurrence(Option<RecurrenceRule>),
    SetPreview(Vec<PreviewBlock>),
    ClearPreview,
    AddPollOption(PollOption),
    RemovePollOption(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub title: String,
    pub game_slug: Option<String>,
    pub slots: Vec<Slot>,
    pub start: Option<DateTime<Utc>>,
    pub duration_hours: u8,
    pub recurrence: Option<RecurrenceRule>,
    pub previews: Vec<PreviewBlock>,
    pub poll_options: PollOptions,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            game_slug: None,
            slots: Vec::new(),
            start: None,
            duration_hours: 2,
            recurrence: None,
            previews: Vec::new(),
            poll_options: PollOptions::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(slots: Vec<Slot>) -> Self {
        Self {
            slots,
            ..Self::default()
        }
    }

    /// Apply an action. Returns whether the state changed.
    pub fn apply(&mut self, action: FormAction) -> bool {
        match action {
            FormAction::ReplaceSlots(slots) => replace(&mut self.slots, slots),
            FormAction::SetTitle(title) => replace(&mut self.title, title),
            FormAction::SetGame(game_slug) => replace(&mut self.game_slug, game_slug),
            FormAction::SetStart(start) => replace(&mut self.start, start),
            FormAction::SetDuration(hours) => {
                replace(&mut self.duration_hours, hours.clamp(1, HOURS_PER_DAY))
            }
            FormAction::SetRecurrence(rule) => replace(&mut self.recurrence, rule),
            FormAction::SetPreview(previews) => replace(&mut self.previews, previews),
            FormAction::ClearPreview => replace(&mut self.previews, Vec::new()),
            FormAction::AddPollOption(option) => self.poll_options.add(option),
            FormAction::RemovePollOption(date) => self.poll_options.remove(&date),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=HOURS_PER_DAY).contains(&self.duration_hours) {
            return Err("Event duration must be between 1 and 24 hours".to_string());
        }

        if let Some(rule) = self.recurrence {
            if self.start.is_none() {
                return Err("Recurring events need a start time".to_string());
            }
            if rule.until.is_none() {
                return Err("Recurrence end date is required".to_string());
            }
        }

        Ok(())
    }

    /// How many events saving this form would create, or `None` while the
    /// start time or recurrence end is still missing.
    pub fn occurrence_preview(&self) -> Option<usize> {
        let start = self.start?;
        match self.recurrence {
            None => Some(1),
            Some(rule) => rule
                .until
                .map(|until| recurrence::count_occurrences(start, rule.frequency, until)),
        }
    }

    /// Preview block for the event being drafted, placed on the viewer's grid.
    pub fn draft_preview(&self, timezone: Option<Tz>) -> Option<PreviewBlock> {
        let start = self.start?.with_timezone(&timezone.unwrap_or(chrono_tz::UTC));
        let start_hour = start.hour() as u8;
        let end_hour = start_hour
            .saturating_add(self.duration_hours)
            .min(HOURS_PER_DAY);

        let mut block = PreviewBlock::new(weekday_index(start.weekday()), start_hour, end_hour);
        if !self.title.trim().is_empty() {
            block.title = Some(self.title.clone());
        }
        block.game_slug = self.game_slug.clone();
        Some(block)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

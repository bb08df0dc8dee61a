// Block module
// Scheduled-event and preview footprints drawn over the weekly grid

use serde::{Deserialize, Serialize};

use super::slot::{CellKey, DAYS_PER_WEEK, HOURS_PER_DAY};

/// Common geometry of anything drawn as a vertical block on the grid.
pub trait BlockSpan {
    fn day_of_week(&self) -> u8;
    fn start_hour(&self) -> u8;
    fn end_hour(&self) -> u8;

    /// `start < end`, both within 0..=24, day within the week.
    fn is_well_formed(&self) -> bool {
        self.day_of_week() < DAYS_PER_WEEK
            && self.start_hour() < self.end_hour()
            && self.end_hour() <= HOURS_PER_DAY
    }

    /// Cell the block is anchored at, i.e. where its content is rendered.
    fn anchor(&self) -> Option<CellKey> {
        if !self.is_well_formed() {
            return None;
        }
        CellKey::new(self.day_of_week(), self.start_hour()).ok()
    }

    fn span_hours(&self) -> u8 {
        self.end_hour().saturating_sub(self.start_hour())
    }
}

/// Footprint of a scheduled event occurrence, already converted to the viewer's
/// local day/hour grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBlock {
    pub event_id: i64,
    pub title: String,
    #[serde(default)]
    pub game_slug: Option<String>,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub signup_id: Option<i64>,
    #[serde(default)]
    pub confirmation_status: Option<String>,
    pub day_of_week: u8,
    pub start_hour: u8,
    pub end_hour: u8,
}

impl EventBlock {
    pub fn new(
        event_id: i64,
        title: impl Into<String>,
        day_of_week: u8,
        start_hour: u8,
        end_hour: u8,
    ) -> Self {
        Self {
            event_id,
            title: title.into(),
            game_slug: None,
            game_name: None,
            cover_url: None,
            signup_id: None,
            confirmation_status: None,
            day_of_week,
            start_hour,
            end_hour,
        }
    }

    pub fn with_game(mut self, slug: impl Into<String>, name: impl Into<String>) -> Self {
        self.game_slug = Some(slug.into());
        self.game_name = Some(name.into());
        self
    }

    /// The viewer is signed up for this event.
    pub fn is_signed_up(&self) -> bool {
        self.signup_id.is_some()
    }
}

impl BlockSpan for EventBlock {
    fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    fn start_hour(&self) -> u8 {
        self.start_hour
    }

    fn end_hour(&self) -> u8 {
        self.end_hour
    }
}

/// Candidate time being composed in a form. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewBlock {
    pub day_of_week: u8,
    pub start_hour: u8,
    pub end_hour: u8,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub game_slug: Option<String>,
}

impl PreviewBlock {
    pub fn new(day_of_week: u8, start_hour: u8, end_hour: u8) -> Self {
        Self {
            day_of_week,
            start_hour,
            end_hour,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Text shown inside the block: title, else label, else game name.
    pub fn display_text(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or(self.label.as_deref())
            .or(self.game_name.as_deref())
    }
}

impl BlockSpan for PreviewBlock {
    fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    fn start_hour(&self) -> u8 {
        self.start_hour
    }

    fn end_hour(&self) -> u8 {
        self.end_hour
    }
}

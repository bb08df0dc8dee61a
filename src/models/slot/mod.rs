// Slot module
// One (day-of-week, hour) cell of a player's weekly availability template

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of day columns in the weekly grid (0 = Sunday).
pub const DAYS_PER_WEEK: u8 = 7;
/// Number of hour rows in the weekly grid.
pub const HOURS_PER_DAY: u8 = 24;

/// Raised when a slot addresses a cell outside the 7×24 week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid slot: day_of_week {day_of_week} must be 0..6 and hour {hour} must be 0..23")]
pub struct InvalidSlotError {
    pub day_of_week: u8,
    pub hour: u8,
}

/// Status of a single grid cell.
///
/// `Inactive` is the implicit default and never appears in a stored template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    #[default]
    Inactive,
    Available,
    Committed,
    Blocked,
    Freed,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Available => "available",
            Self::Committed => "committed",
            Self::Blocked => "blocked",
            Self::Freed => "freed",
        }
    }

    /// Committed and blocked cells belong to scheduled events and cannot be painted.
    pub fn is_paintable(&self) -> bool {
        !matches!(self, Self::Committed | Self::Blocked)
    }
}

/// Explicit identity of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub day_of_week: u8,
    pub hour: u8,
}

impl CellKey {
    pub fn new(day_of_week: u8, hour: u8) -> Result<Self, InvalidSlotError> {
        if day_of_week >= DAYS_PER_WEEK || hour >= HOURS_PER_DAY {
            return Err(InvalidSlotError { day_of_week, hour });
        }
        Ok(Self { day_of_week, hour })
    }

    /// Stable numeric id, `day * 100 + hour`.
    pub fn id(self) -> u16 {
        self.day_of_week as u16 * 100 + self.hour as u16
    }

    pub(crate) fn index(self) -> usize {
        self.day_of_week as usize * HOURS_PER_DAY as usize + self.hour as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            day_of_week: (index / HOURS_PER_DAY as usize) as u8,
            hour: (index % HOURS_PER_DAY as usize) as u8,
        }
    }
}

/// Persisted status of one cell in a weekly template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub day_of_week: u8,
    pub hour: u8,
    pub status: SlotStatus,
}

/// The full set of non-inactive slots owned by one player.
pub type WeeklyTemplate = Vec<Slot>;

impl Slot {
    pub fn new(day_of_week: u8, hour: u8, status: SlotStatus) -> Self {
        Self {
            day_of_week,
            hour,
            status,
        }
    }

    pub fn available(day_of_week: u8, hour: u8) -> Self {
        Self::new(day_of_week, hour, SlotStatus::Available)
    }

    pub fn key(&self) -> Result<CellKey, InvalidSlotError> {
        CellKey::new(self.day_of_week, self.hour)
    }
}

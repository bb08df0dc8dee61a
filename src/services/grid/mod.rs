//! Canonical weekly grid: `(day_of_week, hour) → SlotStatus`.
//!
//! The grid is dense (7×24) so lookups are O(1); only non-inactive cells are
//! ever emitted back out as slots.

use crate::models::slot::{
    CellKey, InvalidSlotError, Slot, SlotStatus, DAYS_PER_WEEK, HOURS_PER_DAY,
};

const CELL_COUNT: usize = DAYS_PER_WEEK as usize * HOURS_PER_DAY as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    cells: [SlotStatus; CELL_COUNT],
}

impl Default for GridModel {
    fn default() -> Self {
        Self {
            cells: [SlotStatus::Inactive; CELL_COUNT],
        }
    }
}

impl GridModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from a sparse slot list.
    ///
    /// Any out-of-range slot fails the whole construction. When two slots share
    /// a cell the later one wins.
    pub fn from_slots<'a, I>(slots: I) -> Result<Self, InvalidSlotError>
    where
        I: IntoIterator<Item = &'a Slot>,
    {
        let mut grid = Self::default();
        for slot in slots {
            let key = slot.key()?;
            grid.cells[key.index()] = slot.status;
        }
        Ok(grid)
    }

    pub fn status(&self, key: CellKey) -> SlotStatus {
        self.cells[key.index()]
    }

    /// Lookup by raw coordinates; anything outside the week reads as inactive.
    pub fn status_at(&self, day_of_week: u8, hour: u8) -> SlotStatus {
        CellKey::new(day_of_week, hour)
            .map(|key| self.status(key))
            .unwrap_or_default()
    }

    pub fn set(&mut self, key: CellKey, status: SlotStatus) {
        self.cells[key.index()] = status;
    }

    pub fn is_paintable(&self, key: CellKey) -> bool {
        self.status(key).is_paintable()
    }

    /// The weekly template: every non-inactive cell, ordered by day then hour.
    pub fn to_slots(&self) -> Vec<Slot> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, status)| **status != SlotStatus::Inactive)
            .map(|(index, status)| {
                let key = CellKey::from_index(index);
                Slot::new(key.day_of_week, key.hour, *status)
            })
            .collect()
    }

}

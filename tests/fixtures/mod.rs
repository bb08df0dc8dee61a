// Test fixtures - reusable test data
// Provides consistent grids, blocks and dates across test files

use chrono::{DateTime, Utc};
use squad_scheduler::models::block::{EventBlock, PreviewBlock};
use squad_scheduler::models::heatmap::HeatmapCell;
use squad_scheduler::models::slot::{CellKey, Slot, SlotStatus};
use squad_scheduler::utils::date::utc_date;

pub fn cell(day: u8, hour: u8) -> CellKey {
    CellKey::new(day, hour).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Jan 5 2026 at midnight UTC
    pub fn monday_jan_5_2026() -> DateTime<Utc> {
        utc_date(2026, 1, 5).unwrap()
    }

    /// Saturday, Jan 31 2026 (month-end anchor)
    pub fn jan_31_2026() -> DateTime<Utc> {
        utc_date(2026, 1, 31).unwrap()
    }
}

/// A player's template: weekday evenings free, one committed raid, one blocked slot.
pub fn evening_template() -> Vec<Slot> {
    let mut slots: Vec<Slot> = (1..=5)
        .flat_map(|day| (19..22).map(move |hour| Slot::available(day, hour)))
        .collect();
    slots.push(Slot::new(3, 22, SlotStatus::Committed));
    slots.push(Slot::new(6, 12, SlotStatus::Blocked));
    slots
}

pub fn raid_night() -> EventBlock {
    let mut block = EventBlock::new(101, "Raid night", 3, 19, 22).with_game("wow", "World of Warcraft");
    block.signup_id = Some(55);
    block.confirmation_status = Some("confirmed".to_string());
    block
}

pub fn draft_preview() -> PreviewBlock {
    PreviewBlock::new(3, 19, 21).with_title("Heroic prog")
}

pub fn squad_heatmap() -> Vec<HeatmapCell> {
    vec![
        HeatmapCell::new(1, 19, 3, 6),
        HeatmapCell::new(2, 20, 5, 6),
        HeatmapCell::new(4, 20, 5, 6),
        HeatmapCell::new(5, 21, 0, 6),
    ]
}

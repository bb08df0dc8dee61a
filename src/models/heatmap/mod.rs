// Heatmap module
// Aggregated availability counts per grid cell, computed server-side

use serde::{Deserialize, Serialize};

use super::slot::{CellKey, InvalidSlotError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub day_of_week: u8,
    pub hour: u8,
    pub available_count: u32,
    pub total_count: u32,
}

impl HeatmapCell {
    pub fn new(day_of_week: u8, hour: u8, available_count: u32, total_count: u32) -> Self {
        Self {
            day_of_week,
            hour,
            available_count,
            total_count,
        }
    }

    pub fn key(&self) -> Result<CellKey, InvalidSlotError> {
        CellKey::new(self.day_of_week, self.hour)
    }

    /// Fraction of players available, in 0.0..=1.0.
    pub fn intensity(&self) -> f32 {
        if self.total_count == 0 {
            return 0.0;
        }
        (self.available_count.min(self.total_count) as f32) / self.total_count as f32
    }

    pub fn tooltip(&self) -> String {
        format!(
            "{} of {} players available",
            self.available_count, self.total_count
        )
    }
}

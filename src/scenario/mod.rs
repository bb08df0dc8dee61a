// Scenario module
// JSON input for the command-line preview: collaborator records for one grid

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::block::{EventBlock, PreviewBlock};
use crate::models::heatmap::HeatmapCell;
use crate::models::recurrence::Frequency;
use crate::models::slot::Slot;
use crate::services::suggestion::SuggestionSource;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRequest {
    pub start: DateTime<Utc>,
    pub frequency: Frequency,
    pub until: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scenario {
    pub slots: Vec<Slot>,
    pub events: Vec<EventBlock>,
    pub heatmap: Vec<HeatmapCell>,
    pub previews: Vec<PreviewBlock>,
    pub today_index: Option<u8>,
    pub recurrence: Option<RecurrenceRequest>,
    pub suggestions: Option<SuggestionSource>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario from {}", path.display()))?;
        Self::from_json(&data)
            .with_context(|| format!("failed to parse scenario in {}", path.display()))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

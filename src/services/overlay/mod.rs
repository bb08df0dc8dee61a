//! Overlay composition for the weekly availability grid.
//!
//! Merges the owner's [`GridModel`] with the aggregated heatmap, scheduled
//! [`EventBlock`]s and ephemeral [`PreviewBlock`]s into one descriptor per
//! visible cell. Rendering code only has to walk the resulting rows.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::block::{BlockSpan, EventBlock, PreviewBlock};
use crate::models::heatmap::HeatmapCell;
use crate::models::slot::{CellKey, SlotStatus, DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::services::grid::GridModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid hour range {start}..{end}: expected 0 <= start < end <= 24")]
pub struct InvalidHourRangeError {
    pub start: u8,
    pub end: u8,
}

/// Half-open range of visible hours, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    start: u8,
    end: u8,
}

impl Default for HourRange {
    fn default() -> Self {
        Self {
            start: 0,
            end: HOURS_PER_DAY,
        }
    }
}

impl HourRange {
    pub fn new(start: u8, end: u8) -> Result<Self, InvalidHourRangeError> {
        if start >= end || end > HOURS_PER_DAY {
            return Err(InvalidHourRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.start && hour < self.end
    }

    pub fn hours(&self) -> std::ops::Range<u8> {
        self.start..self.end
    }

    fn len(&self) -> usize {
        (self.end - self.start) as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapAnnotation {
    pub available_count: u32,
    pub total_count: u32,
    pub intensity: f32,
    pub tooltip: String,
}

impl From<&HeatmapCell> for HeatmapAnnotation {
    fn from(cell: &HeatmapCell) -> Self {
        Self {
            available_count: cell.available_count,
            total_count: cell.total_count,
            intensity: cell.intensity(),
            tooltip: cell.tooltip(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewAnchor {
    pub block: PreviewBlock,
    /// An event block shares this anchor; only the preview border is drawn.
    pub content_suppressed: bool,
}

/// Everything needed to draw one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDescriptor {
    pub key: CellKey,
    pub status: SlotStatus,
    pub heatmap: Option<HeatmapAnnotation>,
    pub event: Option<EventBlock>,
    pub preview: Option<PreviewAnchor>,
    /// Covered by an event block anchored in an earlier hour of the same day.
    pub continues_event: bool,
    pub continues_preview: bool,
    pub is_today: bool,
}

impl CellDescriptor {
    pub fn shows_preview_content(&self) -> bool {
        self.preview
            .as_ref()
            .is_some_and(|anchor| !anchor.content_suppressed)
    }

    pub fn has_preview_border(&self) -> bool {
        self.preview.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedGrid {
    hour_range: HourRange,
    /// Hour-major: one row of seven days per visible hour.
    cells: Vec<CellDescriptor>,
}

impl ComposedGrid {
    pub fn hour_range(&self) -> HourRange {
        self.hour_range
    }

    pub fn cell(&self, day_of_week: u8, hour: u8) -> Option<&CellDescriptor> {
        if day_of_week >= DAYS_PER_WEEK || !self.hour_range.contains(hour) {
            return None;
        }
        let row = (hour - self.hour_range.start) as usize;
        self.cells
            .get(row * DAYS_PER_WEEK as usize + day_of_week as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = (u8, &[CellDescriptor])> {
        self.hour_range
            .hours()
            .zip(self.cells.chunks(DAYS_PER_WEEK as usize))
    }

    pub fn cells(&self) -> &[CellDescriptor] {
        &self.cells
    }
}

struct BlockLayer<'a, B> {
    anchors: HashMap<CellKey, &'a B>,
    continuations: HashSet<CellKey>,
}

impl<'a, B: BlockSpan> BlockLayer<'a, B> {
    fn build(blocks: &'a [B], kind: &str) -> Self {
        let mut anchors = HashMap::new();
        let mut continuations = HashSet::new();

        for block in blocks {
            let Some(anchor) = block.anchor() else {
                log::warn!(
                    "Skipping malformed {} block: day {} hours {}..{}",
                    kind,
                    block.day_of_week(),
                    block.start_hour(),
                    block.end_hour()
                );
                continue;
            };

            if anchors.contains_key(&anchor) {
                log::debug!("Cell {} already anchors a {} block", anchor.id(), kind);
                continue;
            }
            anchors.insert(anchor, block);

            for hour in (block.start_hour() + 1)..block.end_hour() {
                if let Ok(key) = CellKey::new(block.day_of_week(), hour) {
                    continuations.insert(key);
                }
            }
        }

        Self {
            anchors,
            continuations,
        }
    }
}

pub struct OverlayCompositor<'a> {
    grid: &'a GridModel,
    heatmap: &'a [HeatmapCell],
    events: &'a [EventBlock],
    previews: &'a [PreviewBlock],
    hour_range: HourRange,
    today_index: Option<u8>,
}

impl<'a> OverlayCompositor<'a> {
    pub fn new(grid: &'a GridModel) -> Self {
        Self {
            grid,
            heatmap: &[],
            events: &[],
            previews: &[],
            hour_range: HourRange::default(),
            today_index: None,
        }
    }

    pub fn with_heatmap(mut self, heatmap: &'a [HeatmapCell]) -> Self {
        self.heatmap = heatmap;
        self
    }

    pub fn with_events(mut self, events: &'a [EventBlock]) -> Self {
        self.events = events;
        self
    }

    pub fn with_previews(mut self, previews: &'a [PreviewBlock]) -> Self {
        self.previews = previews;
        self
    }

    pub fn with_hour_range(mut self, hour_range: HourRange) -> Self {
        self.hour_range = hour_range;
        self
    }

    pub fn with_today(mut self, today_index: Option<u8>) -> Self {
        self.today_index = today_index;
        self
    }

    pub fn compose(&self) -> ComposedGrid {
        let heatmap = self.heatmap_by_cell();
        let events = BlockLayer::build(self.events, "event");
        let previews = BlockLayer::build(self.previews, "preview");

        let mut cells = Vec::with_capacity(self.hour_range.len() * DAYS_PER_WEEK as usize);
        for hour in self.hour_range.hours() {
            for day in 0..DAYS_PER_WEEK {
                let key = CellKey { day_of_week: day, hour };
                let event = events.anchors.get(&key).map(|block| (*block).clone());
                let preview = previews.anchors.get(&key).map(|block| PreviewAnchor {
                    block: (*block).clone(),
                    content_suppressed: event.is_some(),
                });

                cells.push(CellDescriptor {
                    key,
                    status: self.grid.status(key),
                    heatmap: heatmap.get(&key).map(|cell| HeatmapAnnotation::from(*cell)),
                    event,
                    preview,
                    continues_event: events.continuations.contains(&key),
                    continues_preview: previews.continuations.contains(&key),
                    is_today: self.today_index == Some(day),
                });
            }
        }

        ComposedGrid {
            hour_range: self.hour_range,
            cells,
        }
    }

    fn heatmap_by_cell(&self) -> HashMap<CellKey, &'a HeatmapCell> {
        let mut by_cell = HashMap::with_capacity(self.heatmap.len());
        for cell in self.heatmap {
            match cell.key() {
                Ok(key) => {
                    if cell.available_count > cell.total_count {
                        log::warn!(
                            "Heatmap cell {} reports {} of {} available",
                            key.id(),
                            cell.available_count,
                            cell.total_count
                        );
                    }
                    by_cell.insert(key, cell);
                }
                Err(err) => log::warn!("Skipping heatmap cell: {}", err),
            }
        }
        by_cell
    }
}

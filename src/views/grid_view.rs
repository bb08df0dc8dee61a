//! Plain-text rendering of a [`ComposedGrid`].
//!
//! One row per visible hour, one column per day starting at the configured
//! first day of the week. Block anchors and heatmap counts are drawn inline;
//! block details are listed below the grid.

use std::fmt::Write;

use crate::models::block::BlockSpan;
use crate::models::slot::{SlotStatus, DAYS_PER_WEEK};
use crate::services::overlay::{CellDescriptor, ComposedGrid};
use crate::utils::date::day_short_label;

const CELL_WIDTH: usize = 8;
const TIME_LABEL_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct GridViewOptions {
    pub first_day_of_week: u8,
    pub show_heatmap: bool,
}

fn status_glyph(status: SlotStatus) -> char {
    match status {
        SlotStatus::Inactive => '.',
        SlotStatus::Available => '#',
        SlotStatus::Committed => 'C',
        SlotStatus::Blocked => 'X',
        SlotStatus::Freed => 'f',
    }
}

fn cell_text(cell: &CellDescriptor, show_heatmap: bool) -> String {
    let mut text = if cell.event.is_some() {
        "[E]".to_string()
    } else if cell.shows_preview_content() {
        "[P]".to_string()
    } else if cell.continues_event {
        " | ".to_string()
    } else if cell.continues_preview {
        " : ".to_string()
    } else {
        format!(" {} ", status_glyph(cell.status))
    };

    if show_heatmap {
        if let Some(ref heatmap) = cell.heatmap {
            let _ = write!(text, "{}/{}", heatmap.available_count, heatmap.total_count);
        }
    }
    text
}

fn day_order(first_day_of_week: u8) -> impl Iterator<Item = u8> {
    (0..DAYS_PER_WEEK).map(move |offset| (first_day_of_week + offset) % DAYS_PER_WEEK)
}

pub fn render_grid(grid: &ComposedGrid, options: GridViewOptions) -> String {
    let days: Vec<u8> = day_order(options.first_day_of_week).collect();
    let mut out = String::new();

    let _ = write!(out, "{:width$}", "", width = TIME_LABEL_WIDTH);
    for day in &days {
        let is_today = grid
            .cell(*day, grid.hour_range().start())
            .is_some_and(|cell| cell.is_today);
        let header = if is_today {
            format!("*{}", day_short_label(*day))
        } else {
            day_short_label(*day).to_string()
        };
        let _ = write!(out, "{:<width$}", header, width = CELL_WIDTH);
    }
    out.push('\n');

    for (hour, _) in grid.rows() {
        let _ = write!(out, "{:<width$}", format!("{:02}:00", hour), width = TIME_LABEL_WIDTH);
        for day in &days {
            if let Some(cell) = grid.cell(*day, hour) {
                let _ = write!(
                    out,
                    "{:<width$}",
                    cell_text(cell, options.show_heatmap),
                    width = CELL_WIDTH
                );
            }
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    let anchors: Vec<&CellDescriptor> = grid
        .cells()
        .iter()
        .filter(|cell| cell.event.is_some() || cell.preview.is_some())
        .collect();
    if !anchors.is_empty() {
        out.push('\n');
    }
    for cell in anchors {
        if let Some(ref event) = cell.event {
            let _ = write!(
                out,
                "[E] {} {:02}:00-{:02}:00  {}",
                day_short_label(event.day_of_week),
                event.start_hour,
                event.end_hour,
                event.title
            );
            if let Some(ref game) = event.game_name {
                let _ = write!(out, " ({})", game);
            }
            out.push('\n');
        }
        if let Some(ref preview) = cell.preview {
            let block = &preview.block;
            let text = if preview.content_suppressed {
                "(behind event)"
            } else {
                block.display_text().unwrap_or("New event")
            };
            let _ = writeln!(
                out,
                "[P] {} {:02}:00-{:02}:00  {} [{}h]",
                day_short_label(block.day_of_week),
                block.start_hour,
                block.end_hour,
                text,
                block.span_hours()
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::block::{EventBlock, PreviewBlock};
    use crate::models::heatmap::HeatmapCell;
    use crate::models::slot::Slot;
    use crate::services::grid::GridModel;
    use crate::services::overlay::{HourRange, OverlayCompositor};

    #[test]
    fn test_renders_rows_and_markers() {
        let grid = GridModel::from_slots(&[Slot::available(1, 18)]).unwrap();
        let events = vec![EventBlock::new(3, "Raid", 2, 18, 20).with_game("wow", "World of Warcraft")];
        let heatmap = vec![HeatmapCell::new(1, 19, 2, 4)];
        let composed = OverlayCompositor::new(&grid)
            .with_events(&events)
            .with_heatmap(&heatmap)
            .with_hour_range(HourRange::new(18, 20).unwrap())
            .with_today(Some(1))
            .compose();

        let text = render_grid(
            &composed,
            GridViewOptions {
                first_day_of_week: 1,
                show_heatmap: true,
            },
        );
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].trim_start().starts_with("*Mon"));
        assert!(lines[1].starts_with("18:00  #"));
        assert!(lines[1].contains("[E]"));
        assert!(lines[2].contains("2/4"));
        assert!(lines[2].contains(" | "));
        assert!(text.contains("[E] Tue 18:00-20:00  Raid (World of Warcraft)"));
    }

    #[test]
    fn test_preview_behind_event_is_listed_as_suppressed() {
        let grid = GridModel::new();
        let events = vec![EventBlock::new(1, "Raid", 0, 10, 11)];
        let previews = vec![PreviewBlock::new(0, 10, 12).with_title("Draft")];
        let composed = OverlayCompositor::new(&grid)
            .with_events(&events)
            .with_previews(&previews)
            .compose();

        let text = render_grid(&composed, GridViewOptions::default());
        assert!(text.contains("[P] Sun 10:00-12:00  (behind event) [2h]"));
        assert!(!text.contains("Draft"));
    }
}

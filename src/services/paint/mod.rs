//! Direct-manipulation painting of the availability grid.
//!
//! A drag starts on `pointer_down`, which fixes the [`PaintMode`] from the first
//! cell's status. Every cell entered afterwards is force-set to that mode's
//! target status. Each mutation hands back the complete template so callers can
//! replace their state wholesale.

use crate::models::slot::{CellKey, Slot, SlotStatus};
use crate::services::grid::GridModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    Paint,
    Erase,
}

impl PaintMode {
    /// Mode chosen by the status of the cell a drag starts on.
    pub fn for_status(status: SlotStatus) -> Self {
        match status {
            SlotStatus::Available => Self::Erase,
            _ => Self::Paint,
        }
    }

    pub fn target_status(&self) -> SlotStatus {
        match self {
            Self::Paint => SlotStatus::Available,
            Self::Erase => SlotStatus::Inactive,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintState {
    #[default]
    Idle,
    Painting(PaintMode),
}

#[derive(Clone, Debug, Default)]
pub struct PaintController {
    state: PaintState,
    read_only: bool,
}

impl PaintController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            state: PaintState::Idle,
            read_only: true,
        }
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if read_only {
            self.state = PaintState::Idle;
        }
    }

    fn can_paint(&self, grid: &GridModel, cell: CellKey) -> bool {
        !self.read_only && grid.is_paintable(cell)
    }

    /// Start a drag. Also re-anchors a drag left open by a lost `pointer_up`.
    pub fn pointer_down(&mut self, grid: &mut GridModel, cell: CellKey) -> Option<Vec<Slot>> {
        if !self.can_paint(grid, cell) {
            self.state = PaintState::Idle;
            return None;
        }

        let mode = PaintMode::for_status(grid.status(cell));
        grid.set(cell, mode.target_status());
        self.state = PaintState::Painting(mode);
        log::debug!("Paint started at cell {} in {:?} mode", cell.id(), mode);
        Some(grid.to_slots())
    }

    pub fn pointer_enter(&mut self, grid: &mut GridModel, cell: CellKey) -> Option<Vec<Slot>> {
        let PaintState::Painting(mode) = self.state else {
            return None;
        };
        if !self.can_paint(grid, cell) {
            return None;
        }

        grid.set(cell, mode.target_status());
        Some(grid.to_slots())
    }

    pub fn pointer_up(&mut self) {
        if let PaintState::Painting(mode) = self.state {
            log::debug!("Paint finished ({:?})", mode);
        }
        self.state = PaintState::Idle;
    }

    pub fn is_painting(&self) -> bool {
        matches!(self.state, PaintState::Painting(_))
    }
}

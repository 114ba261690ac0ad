use crate::env::DrawSurface;
use crate::grid::Grid;
use crate::state::Position;

/// Cells touched during a turn, in first-touch order.
#[derive(Clone, Debug, Default)]
pub(crate) struct DirtyCells {
    positions: Vec<Position>,
}

impl DirtyCells {
    pub(crate) fn mark(&mut self, position: Position) {
        if !self.positions.contains(&position) {
            self.positions.push(position);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Redraws every touched cell; occupied cells also get the player marker.
    pub(crate) fn flush(self, grid: &Grid, surface: &mut dyn DrawSurface) {
        for position in self.positions {
            grid.draw_block(position, surface);
        }
    }
}

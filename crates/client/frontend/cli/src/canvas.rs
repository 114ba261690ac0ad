//! In-memory drawing surface.
//!
//! The engine paints into a [`Canvas`] through [`DrawSurface`]; the UI reads
//! it back every frame. Cells are kept exactly as last drawn, so the canvas
//! mirrors whatever the engine has reported without consulting the grid.

use game_core::{CellView, DrawSurface, Position};

/// End-of-level overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Won,
    Lost,
}

#[derive(Clone, Debug, Default)]
pub struct Canvas {
    width: u32,
    height: u32,
    cells: Vec<Option<CellView>>,
    marker: Option<Position>,
    banner: Option<Banner>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The last view drawn at `position`, if any.
    pub fn cell(&self, position: Position) -> Option<&CellView> {
        self.index(position)
            .and_then(|index| self.cells.get(index))
            .and_then(Option::as_ref)
    }

    pub fn marker(&self) -> Option<Position> {
        self.marker
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    /// Row-major rows of drawn cells, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<CellView>]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    fn index(&self, position: Position) -> Option<usize> {
        let in_bounds = position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height;
        in_bounds.then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

impl DrawSurface for Canvas {
    fn begin_level(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.cells = vec![None; width as usize * height as usize];
        self.marker = None;
        self.banner = None;
    }

    fn draw_cell(&mut self, cell: &CellView) {
        let Some(index) = self.index(cell.position) else {
            tracing::warn!(position = %cell.position, "cell drawn outside canvas");
            return;
        };
        self.cells[index] = Some(*cell);
        // A repainted cell covers the marker standing on it.
        if self.marker == Some(cell.position) {
            self.marker = None;
        }
    }

    fn draw_player_marker(&mut self, position: Position) {
        self.marker = Some(position);
    }

    fn draw_win_banner(&mut self) {
        self.banner = Some(Banner::Won);
    }

    fn draw_lose_banner(&mut self) {
        self.banner = Some(Banner::Lost);
    }
}

use crate::item::ItemKind;
use crate::state::Position;
use crate::tile::TileKind;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

/// Snapshot of one cell handed to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub position: Position,
    pub tile: TileKind,
    pub item: Option<ItemKind>,
}

impl CellView {
    pub fn tile_color(&self) -> Rgb {
        self.tile.color()
    }

    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }

    pub fn item_color(&self) -> Option<Rgb> {
        self.item.map(ItemKind::color)
    }
}

/// Output surface the engine notifies after every state-affecting mutation.
///
/// The engine never reads anything back. A cell redraw always precedes the
/// player marker for the same turn, so surfaces may simply paint in call order.
pub trait DrawSurface {
    /// Called before the first draw of a freshly built grid.
    fn begin_level(&mut self, _width: u32, _height: u32) {}

    fn draw_cell(&mut self, cell: &CellView);

    fn draw_player_marker(&mut self, position: Position);

    fn draw_win_banner(&mut self);

    fn draw_lose_banner(&mut self);
}

//! A single addressable grid cell.

use crate::engine::TurnEvent;
use crate::env::CellView;
use crate::item::ItemKind;
use crate::state::{Player, Position};
use crate::tile::{TileContext, TileKind, TileReaction};

/// One cell of the grid: a terrain behavior, at most one item, and whether the
/// player currently stands here.
///
/// The block is the single source of truth for its cell's passability and
/// side effects; the turn engine only talks to tiles and items through it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    position: Position,
    tile: TileKind,
    item: Option<ItemKind>,
    has_player: bool,
}

impl Block {
    pub fn new(position: Position, tile: TileKind, item: Option<ItemKind>) -> Self {
        Self {
            position,
            tile,
            item,
            has_player: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn tile(&self) -> TileKind {
        self.tile
    }

    pub fn item(&self) -> Option<ItemKind> {
        self.item
    }

    pub fn has_player(&self) -> bool {
        self.has_player
    }

    pub fn view(&self) -> CellView {
        CellView {
            position: self.position,
            tile: self.tile,
            item: self.item,
        }
    }

    pub fn can_enter(&self, player: &Player) -> bool {
        self.tile.can_enter(player)
    }

    pub fn can_leave(&self, player: &Player, ctx: &TileContext<'_>) -> bool {
        self.tile.can_leave(player, ctx)
    }

    /// Moves the player onto this block.
    ///
    /// Tile effects resolve before item effects, so damage from the terrain is
    /// applied before a key on the same cell is claimed. Returns the relocation
    /// distance requested by the terrain, if any.
    pub fn enter(
        &mut self,
        player: &mut Player,
        ctx: &TileContext<'_>,
        events: &mut Vec<TurnEvent>,
    ) -> Option<u32> {
        let tile = self.tile;
        let reaction = tile.on_enter(player, ctx);
        self.apply(tile, reaction, events);

        if let Some(item) = self.item {
            if item.on_enter(player) {
                self.item = None;
                events.push(TurnEvent::ItemClaimed {
                    position: self.position,
                    item,
                });
            }
        }

        self.has_player = true;
        reaction.relocate
    }

    /// Moves the player off this block, running the terrain's exit behavior.
    pub fn leave(
        &mut self,
        player: &mut Player,
        ctx: &TileContext<'_>,
        events: &mut Vec<TurnEvent>,
    ) {
        let tile = self.tile;
        let reaction = tile.on_leave(player, ctx);
        self.apply(tile, reaction, events);
        self.has_player = false;
    }

    pub fn set_tile(&mut self, tile: TileKind) {
        self.tile = tile;
    }

    pub fn set_item(&mut self, item: Option<ItemKind>) {
        self.item = item;
    }

    pub(crate) fn set_player_present(&mut self, present: bool) {
        self.has_player = present;
    }

    fn apply(&mut self, tile: TileKind, reaction: TileReaction, events: &mut Vec<TurnEvent>) {
        if let Some(effect) = reaction.effect {
            events.push(TurnEvent::TileEffect {
                position: self.position,
                tile,
                effect,
            });
        }

        if let Some(replacement) = reaction.replace_with {
            tracing::debug!(
                position = %self.position,
                from = %tile,
                to = %replacement,
                "tile transformed"
            );
            self.set_tile(replacement);
            events.push(TurnEvent::Transformed {
                position: self.position,
                from: tile,
                to: replacement,
            });
        }
    }
}

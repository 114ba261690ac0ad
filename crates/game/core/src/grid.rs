//! The level grid: a rectangular array of [`Block`]s built from a level template.

use crate::block::Block;
use crate::config::GameConfig;
use crate::env::{DrawSurface, LevelDefinition, LevelOracle, WinCondition};
use crate::error::BuildError;
use crate::item::ItemKind;
use crate::state::Position;
use crate::tile::TileKind;

/// Size of one cell on the logical drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellExtent {
    pub width: f32,
    pub height: f32,
}

/// Owns every block of the current level.
///
/// Dimensions are fixed once built. Blocks are stored `[y][x]`; callers must
/// bounds-check with [`Grid::contains`] (or use the `Option` accessors) before
/// indexing.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    level: &'static str,
    width: u32,
    height: u32,
    blocks: Vec<Vec<Block>>,
    win_condition: WinCondition,
    cell_extent: CellExtent,
}

impl Grid {
    /// Looks up `name` in the catalog and builds its grid.
    pub fn build(
        levels: &dyn LevelOracle,
        name: &str,
        config: &GameConfig,
    ) -> Result<Self, BuildError> {
        let definition = levels.definition(name)?;
        Self::from_definition(definition, config)
    }

    /// Builds a grid from a level template, marking the start cell occupied.
    ///
    /// Fails on the first code without a registered terrain or item rather
    /// than substituting a default.
    pub fn from_definition(
        definition: &LevelDefinition,
        config: &GameConfig,
    ) -> Result<Self, BuildError> {
        let level = definition.name;
        let (width, height) = validate_shape(definition)?;

        let mut blocks = Vec::with_capacity(height);
        for (y, (terrain_row, item_row)) in definition
            .terrain
            .iter()
            .zip(definition.items.iter())
            .enumerate()
        {
            let mut row = Vec::with_capacity(width);
            for (x, (&terrain_code, &item_code)) in
                terrain_row.iter().zip(item_row.iter()).enumerate()
            {
                let position = Position::new(x as i32, y as i32);
                let tile = TileKind::from_code(terrain_code).ok_or_else(|| {
                    BuildError::UnknownTerrainCode {
                        level: level.to_string(),
                        code: terrain_code,
                        position,
                    }
                })?;
                let item = match item_code {
                    ItemKind::EMPTY_CODE => None,
                    code => Some(ItemKind::from_code(code).ok_or_else(|| {
                        BuildError::UnknownItemCode {
                            level: level.to_string(),
                            code,
                            position,
                        }
                    })?),
                };
                row.push(Block::new(position, tile, item));
            }
            blocks.push(row);
        }

        let mut grid = Self {
            level,
            width: width as u32,
            height: height as u32,
            blocks,
            win_condition: definition.win_condition,
            cell_extent: CellExtent {
                width: config.screen_extent / width as f32,
                height: config.screen_extent / height as f32,
            },
        };

        let start = definition.start;
        let start_tile = grid
            .block(start)
            .map(Block::tile)
            .ok_or_else(|| BuildError::StartOutOfBounds {
                level: level.to_string(),
                start,
                width: grid.width,
                height: grid.height,
            })?;
        if start_tile.is_impassable() {
            return Err(BuildError::StartBlocked {
                level: level.to_string(),
                start,
            });
        }
        if let Some(block) = grid.block_mut(start) {
            block.set_player_present(true);
        }

        tracing::debug!(level, width, height, "grid built");
        Ok(grid)
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn win_condition(&self) -> WinCondition {
        self.win_condition
    }

    pub fn cell_extent(&self) -> CellExtent {
        self.cell_extent
    }

    /// True when `0 <= x < width` and `0 <= y < height`.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn block(&self, position: Position) -> Option<&Block> {
        if !self.contains(position) {
            return None;
        }
        self.blocks
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
    }

    pub fn block_mut(&mut self, position: Position) -> Option<&mut Block> {
        if !self.contains(position) {
            return None;
        }
        self.blocks
            .get_mut(position.y as usize)
            .and_then(|row| row.get_mut(position.x as usize))
    }

    /// Blocks in row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter().flatten()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Block]> + '_ {
        self.blocks.iter().map(Vec::as_slice)
    }

    /// Positions of every block flagged as holding the player.
    pub fn occupied(&self) -> impl Iterator<Item = Position> + '_ {
        self.blocks()
            .filter(|block| block.has_player())
            .map(Block::position)
    }

    /// Redraws a single cell, including the player marker when present.
    pub fn draw_block(&self, position: Position, surface: &mut dyn DrawSurface) {
        if let Some(block) = self.block(position) {
            surface.draw_cell(&block.view());
            if block.has_player() {
                self.draw_player_marker(position, surface);
            }
        }
    }

    pub fn draw_player_marker(&self, position: Position, surface: &mut dyn DrawSurface) {
        surface.draw_player_marker(position);
    }

    /// Initial draw of a freshly built grid.
    pub fn draw_all(&self, surface: &mut dyn DrawSurface) {
        surface.begin_level(self.width, self.height);
        for block in self.blocks() {
            self.draw_block(block.position(), surface);
        }
    }
}

fn validate_shape(definition: &LevelDefinition) -> Result<(usize, usize), BuildError> {
    let level = definition.name;
    let height = definition.height();
    let width = definition.width();
    if height == 0 || width == 0 {
        return Err(BuildError::EmptyTerrain {
            level: level.to_string(),
        });
    }

    if let Some((row, found)) = definition
        .terrain
        .iter()
        .map(|row| row.len())
        .enumerate()
        .find(|(_, len)| *len != width)
    {
        return Err(BuildError::RaggedTerrain {
            level: level.to_string(),
            row,
            expected: width,
            found,
        });
    }

    let items_height = definition.items.len();
    let mismatched_width = definition
        .items
        .iter()
        .map(|row| row.len())
        .find(|len| *len != width);
    if items_height != height || mismatched_width.is_some() {
        return Err(BuildError::ItemGridMismatch {
            level: level.to_string(),
            width,
            height,
            found_width: mismatched_width.unwrap_or(width),
            found_height: items_height,
        });
    }

    Ok((width, height))
}

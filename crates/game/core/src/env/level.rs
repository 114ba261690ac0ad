use std::fmt;

use crate::error::BuildError;
use crate::item::ItemKind;
use crate::state::{Player, Position};

/// Row-major grid of registry codes, indexed `[y][x]`.
pub type CodeGrid = &'static [&'static [u8]];

/// Static description of one level.
///
/// Terrain and item codes are resolved through [`crate::tile::TileKind::from_code`]
/// and [`ItemKind::from_code`] when the grid is built; a definition itself is
/// never validated until then.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelDefinition {
    pub name: &'static str,
    pub start: Position,
    pub terrain: CodeGrid,
    pub items: CodeGrid,
    pub win_condition: WinCondition,
}

impl LevelDefinition {
    pub const fn new(
        name: &'static str,
        start: Position,
        terrain: CodeGrid,
        items: CodeGrid,
        win_condition: WinCondition,
    ) -> Self {
        Self {
            name,
            start,
            terrain,
            items,
            win_condition,
        }
    }

    /// Width of the first terrain row; ragged templates are rejected at build time.
    pub fn width(&self) -> usize {
        self.terrain.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.terrain.len()
    }
}

/// Per-level victory predicate over player state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinCondition {
    /// The inventory holds exactly `count` items of `item`.
    Collected { item: ItemKind, count: usize },
}

impl WinCondition {
    pub const fn keys(count: usize) -> Self {
        Self::Collected {
            item: ItemKind::Key,
            count,
        }
    }

    pub fn is_met(&self, player: &Player) -> bool {
        match *self {
            Self::Collected { item, count } => player.inventory.count(item) == count,
        }
    }
}

impl fmt::Display for WinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collected { item, count: 1 } => write!(f, "collect 1 {item}"),
            Self::Collected { item, count } => write!(f, "collect {count} {item}s"),
        }
    }
}

/// Read-only catalog of level definitions.
pub trait LevelOracle {
    fn level(&self, name: &str) -> Option<&LevelDefinition>;

    /// Level names in presentation order.
    fn level_names(&self) -> Vec<&'static str>;

    /// Like [`LevelOracle::level`], failing with a configuration error.
    fn definition(&self, name: &str) -> Result<&LevelDefinition, BuildError> {
        self.level(name).ok_or_else(|| BuildError::UnknownLevel {
            name: name.to_string(),
        })
    }
}

/// Picks the level to (re)start after a game over.
pub trait LevelChooser {
    /// Returns the chosen level name, or `None` to replay the current level.
    fn choose_level(&mut self, levels: &dyn LevelOracle) -> Option<String>;
}

/// Chooser that always answers with the same level, bypassing any prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedLevel(pub String);

impl FixedLevel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl LevelChooser for FixedLevel {
    fn choose_level(&mut self, _levels: &dyn LevelOracle) -> Option<String> {
        Some(self.0.clone())
    }
}

//! The built-in level catalog.

use game_core::{BuildError, GameConfig, Grid, LevelDefinition, LevelOracle};

use crate::maps;

/// Fixed catalog of the bundled levels.
#[derive(Clone, Copy, Debug)]
pub struct LevelCatalog {
    levels: &'static [LevelDefinition],
}

impl LevelCatalog {
    pub const fn new() -> Self {
        Self { levels: maps::ALL }
    }

    /// Name of the level offered first.
    pub fn default_level(&self) -> &'static str {
        self.levels.first().map_or("demo", |level| level.name)
    }

    pub fn definitions(&self) -> &'static [LevelDefinition] {
        self.levels
    }

    /// Builds every level once, failing on the first malformed template.
    pub fn validate(&self, config: &GameConfig) -> Result<(), BuildError> {
        for definition in self.levels {
            let grid = Grid::from_definition(definition, config)?;
            tracing::debug!(
                level = definition.name,
                width = grid.width(),
                height = grid.height(),
                goal = %definition.win_condition,
                "level validated"
            );
        }
        Ok(())
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelOracle for LevelCatalog {
    fn level(&self, name: &str) -> Option<&LevelDefinition> {
        self.levels.iter().find(|level| level.name == name)
    }

    fn level_names(&self) -> Vec<&'static str> {
        self.levels.iter().map(|level| level.name).collect()
    }
}

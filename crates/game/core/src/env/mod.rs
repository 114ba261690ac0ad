//! Interfaces the engine consumes.
//!
//! Levels, level selection, drawing and randomness are supplied from outside
//! the core. The [`Env`] aggregate bundles them for a single engine call so
//! the engine holds no ambient state and tests can substitute any piece.
mod level;
mod rng;
mod surface;

pub use level::{CodeGrid, FixedLevel, LevelChooser, LevelDefinition, LevelOracle, WinCondition};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use surface::{CellView, DrawSurface, Rgb};

/// Aggregates the collaborators required to resolve turns and load levels.
pub struct Env<'a> {
    pub levels: &'a dyn LevelOracle,
    pub chooser: &'a mut dyn LevelChooser,
    pub surface: &'a mut dyn DrawSurface,
    pub rng: &'a dyn RngOracle,
}

impl<'a> Env<'a> {
    pub fn new(
        levels: &'a dyn LevelOracle,
        chooser: &'a mut dyn LevelChooser,
        surface: &'a mut dyn DrawSurface,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            levels,
            chooser,
            surface,
            rng,
        }
    }
}

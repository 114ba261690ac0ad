//! Level lifecycle and turn resolution.
//!
//! [`GameSession`] is the authoritative owner of the player and the current
//! grid. It replaces the process-wide player/map globals of a typical sketch
//! with one explicit context object: frontends hold a session and hand it an
//! [`Env`] for every call.
//!
//! The session is a small state machine:
//!
//! ```text
//! Playing --(health <= 0)--> Lost --(any turn / restart)--> Playing
//! Playing --(win predicate)--> Won --(any turn / restart)--> Playing
//! ```

mod events;
mod redraw;
mod turns;

pub use events::{TurnEvent, TurnOutcome, TurnReport};

use crate::config::GameConfig;
use crate::env::Env;
use crate::error::{BuildError, TurnError};
use crate::grid::Grid;
use crate::state::Player;

/// Where the current level stands.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the level is won or lost and only a reset can continue play.
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Explicitly owned game context: configuration, player, grid and status.
pub struct GameSession {
    config: GameConfig,
    player: Player,
    grid: Grid,
    status: GameStatus,
    /// Number of turns resolved so far; feeds the RNG seed.
    turn: u64,
}

impl GameSession {
    /// Builds `level`, places a fresh player on its start cell and draws it.
    pub fn start(config: GameConfig, level: &str, env: &mut Env<'_>) -> Result<Self, BuildError> {
        let definition = env.levels.definition(level)?;
        let grid = Grid::from_definition(definition, &config)?;
        let player = Player::new(definition.start, &config);

        grid.draw_all(env.surface);
        tracing::info!(level = definition.name, "level started");

        Ok(Self {
            config,
            player,
            grid,
            status: GameStatus::Playing,
            turn: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn level_name(&self) -> &'static str {
        self.grid.level()
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Replaces the grid with a fresh build of `level` and resets the player.
    ///
    /// The current level stays untouched if the build fails.
    pub fn load_level(&mut self, level: &str, env: &mut Env<'_>) -> Result<(), BuildError> {
        let definition = env.levels.definition(level)?;
        let grid = Grid::from_definition(definition, &self.config)?;

        self.grid = grid;
        self.player.reset(definition.start, &self.config);
        self.status = GameStatus::Playing;

        self.grid.draw_all(env.surface);
        tracing::info!(level = definition.name, "level started");
        Ok(())
    }

    /// Re-runs level bootstrap: asks the chooser for a level (falling back to
    /// the current one) and rebuilds it from scratch.
    pub fn restart(&mut self, env: &mut Env<'_>) -> Result<TurnReport, TurnError> {
        let level = env
            .chooser
            .choose_level(env.levels)
            .unwrap_or_else(|| self.grid.level().to_string());

        self.load_level(&level, env)?;

        Ok(TurnReport::new(
            TurnOutcome::Restarted {
                level: level.clone(),
            },
            vec![TurnEvent::LevelStarted { level }],
            self.status,
        ))
    }
}

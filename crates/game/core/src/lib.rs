//! Deterministic tile/turn rules for the gridwalk puzzle.
//!
//! `game-core` defines the canonical rules (tile behaviors, items, blocks,
//! grid, player state) and the turn engine that resolves one move at a time.
//! All state mutation flows through [`engine::GameSession`]; drawing, level
//! selection and randomness are consumed through the traits in [`env`], so
//! frontends and tests plug in their own implementations.
pub mod block;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod grid;
pub mod item;
pub mod state;
pub mod tile;

pub use block::Block;
pub use config::GameConfig;
pub use engine::{GameSession, GameStatus, TurnEvent, TurnOutcome, TurnReport};
pub use env::{
    CellView, DrawSurface, Env, FixedLevel, LevelChooser, LevelDefinition, LevelOracle, PcgRng, Rgb,
    RngOracle, WinCondition, compute_seed,
};
pub use error::{BuildError, ErrorSeverity, GameError, TurnError, UnknownDirection};
pub use grid::{CellExtent, Grid};
pub use item::ItemKind;
pub use state::{Direction, Inventory, Player, Position};
pub use tile::{TileContext, TileEffect, TileKind, TileReaction};

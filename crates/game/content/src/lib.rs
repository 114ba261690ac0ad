//! Static level content.
//!
//! Levels are plain `const` data consumed through [`game_core::LevelOracle`];
//! they are resolved into playable grids by the core, never mutated here.

pub mod catalog;
mod maps;

pub use catalog::LevelCatalog;

//! Mutable player-facing state.
//!
//! Positions and directions are the shared vocabulary of the grid and the
//! engine; [`Player`] is the single actor whose stats tiles and items mutate.
mod common;
mod inventory;
mod player;

pub use common::{Direction, Position};
pub use inventory::Inventory;
pub use player::Player;

//! Widgets composing the game screen.
pub mod footer;
pub mod header;
pub mod map;
pub mod messages;
pub mod player_stats;

//! Terminal UI frontend for gridwalk.
//!
//! The engine in `game-core` never touches the terminal. This crate supplies
//! its collaborators:
//! - [`Canvas`]: the drawing surface the engine paints cell by cell
//! - [`LevelSelect`]: the level prompt shown at start and after a game over
//! - [`InputHandler`]: keyboard mapping onto engine directions
//!
//! [`CliApp`] owns the session and the terminal and drives the turn loop.

mod app;
mod canvas;
mod config;
mod input;
pub mod logging;
mod message;
pub mod presentation;
mod start_screen;

pub use app::CliApp;
pub use canvas::{Banner, Canvas};
pub use config::{CliConfig, UiConfig};
pub use input::{InputHandler, KeyAction};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use start_screen::LevelSelect;

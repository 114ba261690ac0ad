//! Common error infrastructure for game-core.
//!
//! Errors fall into two groups:
//! - **Configuration** errors ([`BuildError`]): an unknown level name or a
//!   terrain/item code with no registered behavior. These abort the level load
//!   and are never papered over with a default tile.
//! - **Input** errors ([`UnknownDirection`]): an unrecognized command token.
//!   They are rejected without touching game state.
//!
//! Winning and losing are not errors; see [`crate::engine::GameStatus`].

use crate::state::Position;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, rejected without any state change.
    ///
    /// Examples: unknown direction token
    Validation,

    /// The level cannot be loaded; the session has no valid grid to play on.
    ///
    /// Examples: unknown level name, unregistered terrain code
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if play can continue after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A direction token that does not name one of the four moves.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction `{token}` (expected up, down, left or right)")]
pub struct UnknownDirection {
    pub token: String,
}

impl UnknownDirection {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl GameError for UnknownDirection {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "UNKNOWN_DIRECTION"
    }
}

/// Errors raised while turning a level definition into a playable grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unknown level `{name}`")]
    UnknownLevel { name: String },

    #[error("level `{level}` has no terrain rows")]
    EmptyTerrain { level: String },

    #[error("level `{level}` terrain row {row} has {found} cells, expected {expected}")]
    RaggedTerrain {
        level: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "level `{level}` item grid is {found_width}x{found_height}, terrain is {width}x{height}"
    )]
    ItemGridMismatch {
        level: String,
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },

    #[error("level `{level}` uses unregistered terrain code {code} at {position}")]
    UnknownTerrainCode {
        level: String,
        code: u8,
        position: Position,
    },

    #[error("level `{level}` uses unregistered item code {code} at {position}")]
    UnknownItemCode {
        level: String,
        code: u8,
        position: Position,
    },

    #[error("level `{level}` start {start} lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        level: String,
        start: Position,
        width: u32,
        height: u32,
    },

    #[error("level `{level}` start {start} is on impassable terrain")]
    StartBlocked { level: String, start: Position },
}

impl GameError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLevel { .. } => "BUILD_UNKNOWN_LEVEL",
            Self::EmptyTerrain { .. } => "BUILD_EMPTY_TERRAIN",
            Self::RaggedTerrain { .. } => "BUILD_RAGGED_TERRAIN",
            Self::ItemGridMismatch { .. } => "BUILD_ITEM_GRID_MISMATCH",
            Self::UnknownTerrainCode { .. } => "BUILD_UNKNOWN_TERRAIN_CODE",
            Self::UnknownItemCode { .. } => "BUILD_UNKNOWN_ITEM_CODE",
            Self::StartOutOfBounds { .. } => "BUILD_START_OUT_OF_BOUNDS",
            Self::StartBlocked { .. } => "BUILD_START_BLOCKED",
        }
    }
}

/// Errors surfaced by [`crate::engine::GameSession`] turn entry points.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    InvalidDirection(#[from] UnknownDirection),

    #[error("level reload failed: {0}")]
    Reload(#[from] BuildError),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidDirection(err) => err.severity(),
            Self::Reload(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDirection(err) => err.error_code(),
            Self::Reload(err) => err.error_code(),
        }
    }
}

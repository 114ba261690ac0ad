use crate::item::ItemKind;
use crate::state::Position;
use crate::tile::{TileEffect, TileKind};

use super::GameStatus;

/// Something observable that happened while resolving a turn.
///
/// Events are emitted in resolution order and are purely informational; the
/// session state is already updated when they are returned.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    /// A tile applied its entry effect to the player.
    TileEffect {
        position: Position,
        tile: TileKind,
        effect: TileEffect,
    },
    /// A tile replaced itself with another terrain.
    Transformed {
        position: Position,
        from: TileKind,
        to: TileKind,
    },
    ItemClaimed { position: Position, item: ItemKind },
    Teleported { from: Position, to: Position },
    /// Passive damage taken because hydration is below the threshold.
    Dehydrated { damage: i32 },
    Won,
    Lost,
    LevelStarted { level: String },
}

/// How the requested move itself was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// The player moved; `to` is the final cell after any teleport hops.
    Moved { from: Position, to: Position },
    /// The destination exists but its terrain refused entry.
    Blocked { destination: Position },
    /// The destination lies outside the grid.
    OutOfBounds { destination: Position },
    /// The current cell refused to let the player leave; nothing else happened.
    Stuck,
    /// The call was consumed as a reset and the named level was rebuilt.
    Restarted { level: String },
}

/// Result of one engine entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    pub events: Vec<TurnEvent>,
    /// Status after the turn resolved.
    pub status: GameStatus,
}

impl TurnReport {
    pub fn new(outcome: TurnOutcome, events: Vec<TurnEvent>, status: GameStatus) -> Self {
        Self {
            outcome,
            events,
            status,
        }
    }

    pub fn moved(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Moved { .. })
    }
}

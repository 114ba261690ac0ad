use crate::config::GameConfig;
use crate::item::ItemKind;

use super::{Inventory, Position};

/// The single controllable actor.
///
/// Health and hydration are signed so damage can overshoot below zero; the
/// engine treats `health <= 0` as a loss.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub position: Position,
    pub health: i32,
    pub hydration: i32,
    pub inventory: Inventory,
}

impl Player {
    /// Creates a player with full stats standing at `start`.
    pub fn new(start: Position, config: &GameConfig) -> Self {
        Self {
            position: start,
            health: config.max_health,
            hydration: config.max_hydration,
            inventory: Inventory::new(),
        }
    }

    /// Restores start-of-level stats and moves the player to `start`.
    pub fn reset(&mut self, start: Position, config: &GameConfig) {
        *self = Self::new(start, config);
    }

    pub fn has(&self, kind: ItemKind) -> bool {
        self.inventory.contains(kind)
    }

    pub fn claim(&mut self, kind: ItemKind) {
        self.inventory.push(kind);
        tracing::debug!(item = %kind, "picked up item");
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_dehydrated(&self, config: &GameConfig) -> bool {
        self.hydration < config.dehydration_threshold
    }
}

//! Level templates.
//!
//! Terrain codes: 0 grass, 1 ice, 2 water, 3 rock, 4 rock floor, 5 teleporter,
//! 6 sludge, 7 lava, 8 heal block, 9 one-time heal, 10 quicksand.
//! Item codes: 0 none, 1 key, 2 flippers.

use game_core::{LevelDefinition, Position, WinCondition};

pub(crate) const DEMO: LevelDefinition = LevelDefinition::new(
    "demo",
    Position::new(2, 0),
    &[
        &[2, 2, 1, 2, 2, 2],
        &[2, 1, 1, 2, 2, 2],
        &[1, 1, 2, 2, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[2, 2, 2, 2, 2, 1],
        &[2, 2, 2, 2, 1, 1],
    ],
    &[
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 1],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 1, 0],
    ],
    WinCondition::keys(3),
);

// Two keys are placed, so two are required.
pub(crate) const QUICKSAND: LevelDefinition = LevelDefinition::new(
    "quicksand",
    Position::new(3, 1),
    &[
        &[10, 10, 10, 10, 10],
        &[10, 10, 10, 10, 10],
        &[10, 10, 10, 10, 10],
        &[10, 10, 10, 10, 10],
        &[10, 10, 10, 10, 10],
    ],
    &[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 1, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 1, 0],
    ],
    WinCondition::keys(2),
);

pub(crate) const TELEPORT_ACROSS: LevelDefinition = LevelDefinition::new(
    "teleport_across",
    Position::new(3, 3),
    &[
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 4, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 4, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 4, 4, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 5, 3, 3, 4, 4, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 4, 4, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 4, 4, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 4, 4, 4, 4],
        &[0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 4, 4, 4, 4],
        &[0, 2, 2, 0, 0, 0, 0, 0, 3, 3, 4, 4, 4, 4, 4],
        &[2, 2, 2, 2, 0, 0, 0, 0, 3, 3, 4, 4, 4, 4, 4],
        &[2, 2, 2, 2, 2, 2, 0, 0, 3, 3, 3, 4, 4, 4, 4],
    ],
    &[
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ],
    WinCondition::keys(1),
);

pub(crate) const SLUDGE_LAVAFIELDS: LevelDefinition = LevelDefinition::new(
    "sludge_lavafields",
    Position::new(3, 0),
    &[
        &[6, 6, 6, 4, 6, 6, 7],
        &[6, 7, 7, 7, 6, 6, 7],
        &[6, 7, 7, 7, 6, 7, 3],
        &[6, 6, 3, 6, 6, 3, 4],
        &[3, 6, 3, 6, 7, 6, 6],
        &[4, 4, 4, 6, 6, 6, 7],
        &[4, 4, 4, 4, 6, 7, 7],
    ],
    &[
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 1],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0],
    ],
    WinCondition::keys(2),
);

pub(crate) const HEAL_CORRIDOR: LevelDefinition = LevelDefinition::new(
    "heal_corridor",
    Position::new(0, 1),
    &[
        &[3, 3, 3, 3, 3, 3, 3],
        &[4, 6, 6, 6, 6, 6, 3],
        &[3, 3, 3, 3, 3, 6, 8],
        &[3, 6, 6, 6, 6, 6, 3],
        &[8, 6, 3, 3, 3, 3, 3],
        &[3, 6, 6, 6, 6, 8, 3],
        &[3, 3, 3, 3, 3, 3, 3],
    ],
    &[
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 1, 0],
        &[0, 0, 0, 0, 0, 0, 0],
    ],
    WinCondition::keys(1),
);

/// Flippers on the shore, keys across the water.
pub(crate) const LAGOON: LevelDefinition = LevelDefinition::new(
    "lagoon",
    Position::new(0, 0),
    &[
        &[0, 0, 2, 2, 2, 0],
        &[0, 3, 2, 2, 2, 0],
        &[0, 3, 2, 0, 2, 0],
        &[4, 3, 2, 2, 2, 0],
        &[4, 4, 0, 3, 0, 0],
    ],
    &[
        &[0, 2, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 0],
    ],
    WinCondition::keys(2),
);

/// A lava hall with single-use heals; retreating costs more than pressing on.
pub(crate) const RECOVERY_WARD: LevelDefinition = LevelDefinition::new(
    "recovery_ward",
    Position::new(0, 1),
    &[
        &[3, 3, 3, 3, 3, 3, 3, 3],
        &[4, 7, 7, 9, 7, 7, 9, 0],
        &[3, 3, 3, 3, 3, 3, 3, 3],
    ],
    &[
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 1],
        &[0, 0, 0, 0, 0, 0, 0, 0],
    ],
    WinCondition::keys(1),
);

/// Every level, in presentation order.
pub(crate) const ALL: &[LevelDefinition] = &[
    DEMO,
    QUICKSAND,
    TELEPORT_ACROSS,
    SLUDGE_LAVAFIELDS,
    HEAL_CORRIDOR,
    LAGOON,
    RECOVERY_WARD,
];

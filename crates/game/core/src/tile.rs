//! Terrain behaviors.
//!
//! Every cell owns exactly one [`TileKind`]. The kind decides whether the
//! player may enter or leave the cell and what happens when they do. Behaviors
//! never reach into their owning block: a tile that turns into another terrain
//! reports the replacement in its [`TileReaction`] and the block performs the
//! swap, discarding the old kind.

use crate::config::GameConfig;
use crate::env::{Rgb, RngOracle};
use crate::item::ItemKind;
use crate::state::Player;

/// Read-only rules and randomness available to tile callbacks.
#[derive(Clone, Copy)]
pub struct TileContext<'a> {
    pub config: &'a GameConfig,
    pub rng: &'a dyn RngOracle,
    /// Seed for this turn's rolls; see [`crate::env::compute_seed`].
    pub seed: u64,
}

impl<'a> TileContext<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self { config, rng, seed }
    }
}

/// Terrain variants, addressed by their level-template code.
///
/// | code | kind        | effect                                                  |
/// |------|-------------|---------------------------------------------------------|
/// | 0    | Grass       | none                                                    |
/// | 1    | Ice         | turns into water once left                              |
/// | 2    | Water       | needs flippers; refills hydration                       |
/// | 3    | Rock        | never enterable                                         |
/// | 4    | RockFloor   | none                                                    |
/// | 5    | Teleporter  | skips the player further along the direction of travel  |
/// | 6    | Sludge      | damages, then hardens into rock floor                   |
/// | 7    | Lava        | damages more than sludge, never consumed                |
/// | 8    | HealBlock   | restores health to full                                 |
/// | 9    | OneTimeHeal | restores health to full, then becomes rock floor        |
/// | 10   | QuickSand   | may refuse to let the player leave                      |
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileKind {
    Grass,
    Ice,
    Water,
    Rock,
    RockFloor,
    Teleporter,
    Sludge,
    Lava,
    HealBlock,
    OneTimeHeal,
    QuickSand,
}

/// Player-visible effect a tile applied on entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileEffect {
    Damaged { amount: i32 },
    Healed,
    Rehydrated,
}

/// Outcome of an entry or exit callback, applied by the owning block and the
/// turn engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileReaction {
    pub effect: Option<TileEffect>,
    /// Terrain the owning block must switch to.
    pub replace_with: Option<TileKind>,
    /// Number of cells to push the player further along the direction of travel.
    pub relocate: Option<u32>,
}

impl TileReaction {
    pub const NONE: Self = Self {
        effect: None,
        replace_with: None,
        relocate: None,
    };

    #[must_use]
    pub const fn with_effect(mut self, effect: TileEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub const fn replaced_by(mut self, kind: TileKind) -> Self {
        self.replace_with = Some(kind);
        self
    }

    #[must_use]
    pub const fn relocating(mut self, distance: u32) -> Self {
        self.relocate = Some(distance);
        self
    }
}

impl TileKind {
    /// Looks up the terrain registered for a level-template code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Grass),
            1 => Some(Self::Ice),
            2 => Some(Self::Water),
            3 => Some(Self::Rock),
            4 => Some(Self::RockFloor),
            5 => Some(Self::Teleporter),
            6 => Some(Self::Sludge),
            7 => Some(Self::Lava),
            8 => Some(Self::HealBlock),
            9 => Some(Self::OneTimeHeal),
            10 => Some(Self::QuickSand),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Grass => 0,
            Self::Ice => 1,
            Self::Water => 2,
            Self::Rock => 3,
            Self::RockFloor => 4,
            Self::Teleporter => 5,
            Self::Sludge => 6,
            Self::Lava => 7,
            Self::HealBlock => 8,
            Self::OneTimeHeal => 9,
            Self::QuickSand => 10,
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Self::Grass => Rgb::new(120, 200, 10),
            Self::Ice => Rgb::new(230, 230, 255),
            Self::Water => Rgb::new(140, 140, 255),
            Self::Rock => Rgb::new(120, 100, 140),
            Self::RockFloor => Rgb::new(80, 60, 100),
            Self::Teleporter => Rgb::new(255, 0, 210),
            Self::Sludge => Rgb::new(180, 90, 120),
            Self::Lava => Rgb::new(240, 150, 0),
            Self::HealBlock => Rgb::new(255, 160, 180),
            Self::OneTimeHeal => Rgb::new(200, 165, 165),
            Self::QuickSand => Rgb::new(220, 175, 100),
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Grass => '"',
            Self::Ice => '-',
            Self::Water => '~',
            Self::Rock => '#',
            Self::RockFloor => '.',
            Self::Teleporter => '*',
            Self::Sludge => '%',
            Self::Lava => '^',
            Self::HealBlock => '+',
            Self::OneTimeHeal => 'o',
            Self::QuickSand => ':',
        }
    }

    /// True for terrain no player can ever stand on.
    pub const fn is_impassable(self) -> bool {
        matches!(self, Self::Rock)
    }

    pub fn can_enter(self, player: &Player) -> bool {
        match self {
            Self::Water => player.has(ItemKind::Flippers),
            Self::Rock => false,
            _ => true,
        }
    }

    pub fn can_leave(self, _player: &Player, ctx: &TileContext<'_>) -> bool {
        match self {
            Self::QuickSand => {
                let roll = ctx.rng.roll_d100(ctx.seed);
                let held = roll <= ctx.config.quicksand_hold_percent;
                if held {
                    tracing::debug!(roll, "quicksand holds the player");
                }
                !held
            }
            _ => true,
        }
    }

    pub fn on_enter(self, player: &mut Player, ctx: &TileContext<'_>) -> TileReaction {
        let config = ctx.config;
        match self {
            Self::Water => {
                player.hydration = config.max_hydration;
                TileReaction::NONE.with_effect(TileEffect::Rehydrated)
            }
            Self::Sludge => {
                player.health -= config.sludge_damage;
                TileReaction::NONE
                    .with_effect(TileEffect::Damaged {
                        amount: config.sludge_damage,
                    })
                    .replaced_by(Self::RockFloor)
            }
            Self::Lava => {
                player.health -= config.lava_damage;
                TileReaction::NONE.with_effect(TileEffect::Damaged {
                    amount: config.lava_damage,
                })
            }
            Self::HealBlock => {
                player.health = config.max_health;
                TileReaction::NONE.with_effect(TileEffect::Healed)
            }
            Self::OneTimeHeal => {
                player.health = config.max_health;
                TileReaction::NONE
                    .with_effect(TileEffect::Healed)
                    .replaced_by(Self::RockFloor)
            }
            Self::Teleporter => TileReaction::NONE.relocating(config.teleport_distance),
            Self::Grass | Self::Ice | Self::Rock | Self::RockFloor | Self::QuickSand => {
                TileReaction::NONE
            }
        }
    }

    pub fn on_leave(self, _player: &mut Player, _ctx: &TileContext<'_>) -> TileReaction {
        match self {
            Self::Ice => TileReaction::NONE.replaced_by(Self::Water),
            _ => TileReaction::NONE,
        }
    }
}

//! Collectible items lying on blocks.

use crate::env::Rgb;
use crate::state::Player;

/// Kinds of collectible items.
///
/// The display name doubles as the inventory entry (`"key"`, `"flippers"`).
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
pub enum ItemKind {
    /// Claimed on entry; levels count keys to decide victory.
    Key,
    /// Claimed on entry; lets the player swim into water.
    Flippers,
}

impl ItemKind {
    /// Item-grid code meaning "no item on this cell".
    pub const EMPTY_CODE: u8 = 0;

    /// Looks up the item registered for a non-empty item-grid code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Key),
            2 => Some(Self::Flippers),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Key => 1,
            Self::Flippers => 2,
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Self::Key => Rgb::new(220, 200, 0),
            Self::Flippers => Rgb::new(0, 170, 170),
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Key => 'k',
            Self::Flippers => 'f',
        }
    }

    /// Runs the pickup effect for a player stepping onto the item.
    ///
    /// Returns true when the item was claimed and must be removed from its
    /// block. Items that do nothing on entry stay on the ground.
    pub fn on_enter(self, player: &mut Player) -> bool {
        match self {
            Self::Key | Self::Flippers => {
                player.claim(self);
                true
            }
        }
    }
}

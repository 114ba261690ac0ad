/// Game configuration constants and tunable parameters.
///
/// The defaults reproduce the classic rules: 100 health and hydration,
/// dehydration below 10 costs 2 health per turn, sludge deals 8 damage and
/// lava 15, teleporters jump 3 cells and quicksand holds the player 25% of the
/// time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Health a player starts with; heal tiles restore up to this value.
    pub max_health: i32,
    /// Hydration a player starts with; water tiles restore up to this value.
    pub max_hydration: i32,
    /// Hydration strictly below this value causes passive health loss.
    pub dehydration_threshold: i32,
    /// Health lost per turn while dehydrated.
    pub dehydration_damage: i32,
    /// Hydration lost for every cell the player actually moves.
    pub hydration_decay: i32,
    pub sludge_damage: i32,
    pub lava_damage: i32,
    /// Number of cells a teleporter skips in the direction of travel.
    pub teleport_distance: u32,
    /// Chance (0..=100) that quicksand refuses to let the player leave.
    pub quicksand_hold_percent: u32,
    /// Side length of the logical drawing area, divided evenly between cells.
    pub screen_extent: f32,
    /// Session seed mixed with the turn counter for every random roll.
    pub rng_seed: u64,
}

impl GameConfig {
    pub const DEFAULT_MAX_HEALTH: i32 = 100;
    pub const DEFAULT_MAX_HYDRATION: i32 = 100;
    pub const DEFAULT_DEHYDRATION_THRESHOLD: i32 = 10;
    pub const DEFAULT_DEHYDRATION_DAMAGE: i32 = 2;
    pub const DEFAULT_SLUDGE_DAMAGE: i32 = 8;
    pub const DEFAULT_LAVA_DAMAGE: i32 = 15;
    pub const DEFAULT_TELEPORT_DISTANCE: u32 = 3;
    pub const DEFAULT_QUICKSAND_HOLD_PERCENT: u32 = 25;
    pub const DEFAULT_SCREEN_EXTENT: f32 = 400.0;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            max_hydration: Self::DEFAULT_MAX_HYDRATION,
            dehydration_threshold: Self::DEFAULT_DEHYDRATION_THRESHOLD,
            dehydration_damage: Self::DEFAULT_DEHYDRATION_DAMAGE,
            hydration_decay: 0,
            sludge_damage: Self::DEFAULT_SLUDGE_DAMAGE,
            lava_damage: Self::DEFAULT_LAVA_DAMAGE,
            teleport_distance: Self::DEFAULT_TELEPORT_DISTANCE,
            quicksand_hold_percent: Self::DEFAULT_QUICKSAND_HOLD_PERCENT,
            screen_extent: Self::DEFAULT_SCREEN_EXTENT,
            rng_seed: 0,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    #[must_use]
    pub fn with_hydration_decay(mut self, hydration_decay: i32) -> Self {
        self.hydration_decay = hydration_decay.max(0);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! CLI configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// CLI terminal UI configuration.
///
/// Game rules are tuned here too, since the CLI is the only place a player can
/// pick them.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Level to load directly, bypassing the level prompt.
    pub level: Option<String>,
    pub game: GameConfig,
    pub ui: UiConfig,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GRIDWALK_LEVEL` - Level name to start on, skipping the prompt
    /// - `GRIDWALK_SEED` - Seed for quicksand rolls (default: 0)
    /// - `GRIDWALK_HYDRATION_DECAY` - Hydration lost per move (default: 0)
    /// - `GRIDWALK_MESSAGE_CAPACITY` - Messages kept in the log (default: 64)
    /// - `GRIDWALK_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `GRIDWALK_LOG_DIR` - Directory for log files
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.level = env::var("GRIDWALK_LEVEL")
            .ok()
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty());

        if let Some(seed) = read_env::<u64>("GRIDWALK_SEED") {
            config.game = config.game.with_seed(seed);
        }
        if let Some(decay) = read_env::<i32>("GRIDWALK_HYDRATION_DECAY") {
            config.game = config.game.with_hydration_decay(decay);
        }
        if let Some(capacity) = read_env::<usize>("GRIDWALK_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }
        if let Some(height) = read_env::<u16>("GRIDWALK_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        config.log_dir = env::var_os("GRIDWALK_LOG_DIR").map(PathBuf::from);

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Number of messages retained in the log.
    pub message_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            message_capacity: 64,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

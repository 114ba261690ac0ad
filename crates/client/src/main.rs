//! gridwalk binary.
//!
//! Composition root: loads configuration, installs logging, validates the
//! bundled level catalog and hands control to the frontend.
//!
//! # Examples
//!
//! ```bash
//! # Skip the level prompt and make every move cost water
//! GRIDWALK_LEVEL=lagoon GRIDWALK_HYDRATION_DECAY=5 cargo run -p gridwalk-client
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliApp, CliConfig, logging};
    use game_content::LevelCatalog;

    // 1. Load configuration from environment
    let config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(config.log_dir.as_deref())?;
    tracing::info!(
        level = config.level.as_deref().unwrap_or("<prompt>"),
        seed = config.game.rng_seed,
        hydration_decay = config.game.hydration_decay,
        "starting gridwalk"
    );

    // 3. Fail fast on malformed content before touching the terminal
    let catalog = LevelCatalog::new();
    catalog
        .validate(&config.game)
        .context("bundled level catalog is invalid")?;

    // 4. Run
    CliApp::new(config, catalog).run()?;

    tracing::info!("gridwalk shutdown complete");
    Ok(())
}

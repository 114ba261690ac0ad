//! File logging for the terminal client.
//!
//! The terminal is owned by the UI, so events only ever go to a file.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a file-backed subscriber and returns the log file path.
///
/// `RUST_LOG` directives are honored on top of the `info` default.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = log_dir.map_or_else(get_log_directory, Path::to_path_buf);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let file_name = format!("gridwalk_{timestamp}.log");

    let file_appender = tracing_appender::rolling::never(&log_dir, &file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    // The writer must outlive every event; the process exits shortly after the UI.
    std::mem::forget(guard);

    let log_file = log_dir.join(file_name);
    tracing::info!(path = %log_file.display(), "logging initialized");
    Ok(log_file)
}

/// Platform-specific log directory.
pub fn get_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Caches")
                .join("gridwalk")
                .join("logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("gridwalk").join("logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".cache")
                .join("gridwalk")
                .join("logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join("gridwalk").join("logs");
        }
    }

    std::env::temp_dir().join("gridwalk").join("logs")
}

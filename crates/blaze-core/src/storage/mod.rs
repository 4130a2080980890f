mod config;
pub mod database;

pub use config::{Config, NotificationsConfig, TargetsConfig, TimerConfig};
pub use database::{keys, Database};

use std::path::PathBuf;

/// Returns `~/.config/blaze[-dev]/` based on BLAZE_ENV.
///
/// Set BLAZE_ENV=dev to use a development data directory.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BLAZE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("blaze-dev")
    } else {
        base_dir.join("blaze")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

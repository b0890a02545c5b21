mod config;
mod journal_store;

pub use config::{Config, DisplayConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `EXHALE_DATA_DIR` overrides the location entirely (used by tests).
/// Otherwise `~/.config/exhale[-dev]/` based on EXHALE_ENV; set
/// EXHALE_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = if let Ok(override_dir) = std::env::var("EXHALE_DATA_DIR") {
        PathBuf::from(override_dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("EXHALE_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("exhale-dev")
        } else {
            base_dir.join("exhale")
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}

//! Demo configuration persistence
//!
//! Loads display-value and timing overrides from the user's config
//! directory. Flow state itself is never persisted — only the static demo
//! values (merchant, amount, masks, durations).

use std::fs;
use std::path::{Path, PathBuf};

use acsim_core::DemoConfig;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "acsim";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    // Try XDG_CONFIG_HOME first, then fall back to ~/.config
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
    }

    dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
}

/// Get the full config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE_NAME))
}

/// Load the demo configuration, writing the defaults on first run
///
/// Any read or parse failure falls back to defaults with a warning; a broken
/// config file must not keep the demo from starting.
pub fn load_or_init() -> DemoConfig {
    let path = match config_file_path() {
        Some(p) => p,
        None => return DemoConfig::default(),
    };

    if !path.exists() {
        let config = DemoConfig::default();
        if let Err(e) = save_to(&config, &path) {
            tracing::warn!("Failed to write initial config: {}", e);
        }
        return config;
    }

    load_from(&path)
}

/// Load configuration from a specific file
fn load_from(path: &Path) -> DemoConfig {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse config file: {}", e);
            DemoConfig::default()
        }),
        Err(e) => {
            tracing::warn!("Failed to read config file: {}", e);
            DemoConfig::default()
        }
    }
}

/// Save configuration to a specific file
fn save_to(config: &DemoConfig, path: &Path) -> Result<(), ConfigError> {
    let dir = path.parent().ok_or(ConfigError::NoConfigDir)?;

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
    }

    let contents =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))?;

    fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

    tracing::debug!("Saved config to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = DemoConfig::default();
        config.merchant = "TestShop".to_string();
        config.redirect_secs = 5;

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");
        assert_eq!(load_from(&path), DemoConfig::default());
    }

    #[test]
    fn test_broken_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_from(&path), DemoConfig::default());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        save_to(&DemoConfig::default(), &path).unwrap();
        assert!(path.exists());
    }
}

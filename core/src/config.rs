//! Loading and saving of the client configuration and roster snapshots.
//!
//! The client configuration lives in the platform config store managed by
//! `confy`. Roster snapshots are standalone TOML files that stand in for a
//! live game connection.

use std::fs;
use std::path::{Path, PathBuf};

use rosterwatch_types::ClientConfig;

use crate::error::ConfigError;
use crate::roster::RosterSnapshot;

const APP_NAME: &str = "rosterwatch";

/// Load the client configuration, falling back to defaults on any failure.
pub fn load_client_config() -> ClientConfig {
    match confy::load(APP_NAME, None) {
        Ok(config) => {
            tracing::info!("Loaded client config");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load client config, using defaults");
            ClientConfig::default()
        }
    }
}

/// Persist the client configuration.
pub fn store_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    confy::store(APP_NAME, None, config)?;
    tracing::info!("Stored client config");
    Ok(())
}

/// Load a roster snapshot from a TOML file.
pub fn load_snapshot(path: &Path) -> Result<RosterSnapshot, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let snapshot: RosterSnapshot = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        slots = snapshot.slots.len(),
        "Loaded roster snapshot"
    );
    Ok(snapshot)
}

/// Save a roster snapshot to a TOML file.
pub fn save_snapshot(path: &Path, snapshot: &RosterSnapshot) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(snapshot).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Default directory for roster snapshot files.
pub fn default_snapshot_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_NAME).join("snapshots"))
}

/// Resolve a snapshot path given on the command line.
///
/// Relative paths are looked up in [`default_snapshot_dir`] when they do not
/// exist relative to the working directory.
pub fn resolve_snapshot_path(path: &str) -> PathBuf {
    let given = Path::new(path);
    if given.is_absolute() || given.exists() {
        return given.to_path_buf();
    }
    match default_snapshot_dir() {
        Some(dir) => dir.join(given),
        None => given.to_path_buf(),
    }
}

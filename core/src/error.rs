//! Error types for the classification core and its adapters.
//!
//! None of these are fatal: every failure path degrades to a user-visible
//! message and leaves state unchanged.

use std::path::PathBuf;

use rosterwatch_types::Category;

/// Failures of overlay store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// Blank or whitespace-only name. Callers treat this as a bug and say nothing.
    #[error("empty player name")]
    EmptyIdentifier,

    #[error("couldn't find \"{name}\" on the Temp {category} List")]
    EntryNotFound { category: Category, name: String },
}

/// Failures of status queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("Couldn't find a player with the name \"{name}\"")]
    PlayerNotFound { name: String },
}

/// Skin save/restore refusals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkinError {
    #[error("Can't {action}! Rainbow mode is enabled.")]
    RainbowActive { action: &'static str },
}

/// Vote call failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoteError {
    #[error("No player with this name found.")]
    PlayerNotFound { name: String },
}

/// Errors reading or writing configuration and roster snapshot files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    #[error("config store error: {0}")]
    Store(#[from] confy::ConfyError),
}

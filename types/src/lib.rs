//! Shared types for rosterwatch.
//!
//! Everything here is plain data: the classification categories understood by
//! the overlay store and the client configuration object that the command
//! adapter loads, edits and persists.

pub mod formatting;

use serde::{Deserialize, Serialize};

/// Number of local characters a client can drive (main + dummy).
pub const NUM_DUMMIES: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

/// Temporary classification a player name can carry.
///
/// `War` and `Helper` are opposite sides: a name holds at most one of them.
/// `Mute` is orthogonal and may coexist with either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    War,
    Helper,
    Mute,
}

impl Category {
    /// Label used in user-facing list names ("Temp War List").
    pub fn label(self) -> &'static str {
        match self {
            Category::War => "War",
            Category::Helper => "Helper",
            Category::Mute => "Mute",
        }
    }

    /// True for the two mutually exclusive categories.
    pub fn is_side(self) -> bool {
        matches!(self, Category::War | Category::Helper)
    }

    /// The category that is implicitly cleared when this one is added.
    pub fn opposite(self) -> Option<Category> {
        match self {
            Category::War => Some(Category::Helper),
            Category::Helper => Some(Category::War),
            Category::Mute => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Persistent client configuration consulted by the command adapter.
///
/// The classification core never reads this; skin and rainbow commands get it
/// passed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Whether commands currently target the dummy instead of the main character
    pub dummy_active: bool,
    pub player: SkinProfile,
    pub dummy: SkinProfile,
    pub saved_player: SkinProfile,
    pub saved_dummy: SkinProfile,
    pub rainbow: RainbowSettings,
    pub presence: PresenceSettings,
}

impl ClientConfig {
    /// Index of the active character (0 = main, 1 = dummy).
    pub fn active_index(&self) -> usize {
        usize::from(self.dummy_active)
    }
}

/// Appearance and identity of one local character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinProfile {
    pub skin: String,
    pub name: String,
    pub clan: String,
    pub country: i32,
    pub use_custom_color: bool,
    pub color_body: u32,
    pub color_feet: u32,
}

impl Default for SkinProfile {
    fn default() -> Self {
        Self {
            skin: "default".to_string(),
            name: "nameless tee".to_string(),
            clan: String::new(),
            country: -1,
            use_custom_color: false,
            color_body: 65408,
            color_feet: 65408,
        }
    }
}

/// Server-side rainbow mode parameters.
///
/// Per-character values are indexed by [`ClientConfig::active_index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainbowSettings {
    /// Rainbow mode enabled; blocks skin save/restore while on
    pub server_rainbow: bool,
    pub speed: i32,
    pub both_players: bool,
    pub saturation: [i32; NUM_DUMMIES],
    pub lightness: [i32; NUM_DUMMIES],
    pub body: [bool; NUM_DUMMIES],
    pub feet: [bool; NUM_DUMMIES],
}

impl Default for RainbowSettings {
    fn default() -> Self {
        Self {
            server_rainbow: false,
            speed: 10,
            both_players: false,
            saturation: [200; NUM_DUMMIES],
            lightness: [30; NUM_DUMMIES],
            body: [true; NUM_DUMMIES],
            feet: [true; NUM_DUMMIES],
        }
    }
}

/// Rich-presence toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceSettings {
    pub enabled: bool,
    /// Publish the current map name alongside the activity
    pub show_map: bool,
}

impl Default for PresenceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_map: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_opposites() {
        assert_eq!(Category::War.opposite(), Some(Category::Helper));
        assert_eq!(Category::Helper.opposite(), Some(Category::War));
        assert_eq!(Category::Mute.opposite(), None);
        assert!(!Category::Mute.is_side());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
dummy_active = true

[player]
name = "brainless"

[rainbow]
speed = 25
"#;
        let config: ClientConfig = toml::from_str(toml).unwrap();
        assert!(config.dummy_active);
        assert_eq!(config.active_index(), 1);
        assert_eq!(config.player.name, "brainless");
        assert_eq!(config.player.skin, "default");
        assert_eq!(config.rainbow.speed, 25);
        assert_eq!(config.rainbow.saturation, [200, 200]);
        assert!(config.presence.enabled);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = ClientConfig::default();
        config.saved_dummy.clan = "abc".to_string();
        config.rainbow.body = [false, true];
        let text = toml::to_string(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}

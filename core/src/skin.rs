//! Saving and restoring the local character's appearance.
//!
//! Both operations act on whichever character is active (main or dummy) and
//! are refused while server-side rainbow mode is rewriting colors.

use rosterwatch_types::{ClientConfig, SkinProfile};

use crate::error::SkinError;

/// Which local character an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character {
    Main,
    Dummy,
}

impl Character {
    fn of(config: &ClientConfig) -> Self {
        if config.dummy_active {
            Character::Dummy
        } else {
            Character::Main
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Character::Main => "Main",
            Character::Dummy => "Dummy",
        }
    }
}

fn split(config: &mut ClientConfig) -> (&mut SkinProfile, &mut SkinProfile) {
    if config.dummy_active {
        (&mut config.dummy, &mut config.saved_dummy)
    } else {
        (&mut config.player, &mut config.saved_player)
    }
}

/// Copy the active character's appearance into its saved profile.
pub fn save_skin(config: &mut ClientConfig) -> Result<Character, SkinError> {
    if config.rainbow.server_rainbow {
        return Err(SkinError::RainbowActive { action: "Save" });
    }
    let character = Character::of(config);
    let (current, saved) = split(config);
    saved.clone_from(current);
    tracing::info!(character = character.label(), "Saved skin");
    Ok(character)
}

/// Copy the saved profile back onto the active character.
pub fn restore_skin(config: &mut ClientConfig) -> Result<Character, SkinError> {
    if config.rainbow.server_rainbow {
        return Err(SkinError::RainbowActive { action: "Restore" });
    }
    let character = Character::of(config);
    let (current, saved) = split(config);
    current.clone_from(saved);
    tracing::info!(character = character.label(), "Restored skin");
    Ok(character)
}

pub fn saved_message(character: Character) -> String {
    format!("Saved {} Skin", character.label())
}

pub fn restored_message(character: Character) -> String {
    format!("Restored {} Skin", character.label())
}

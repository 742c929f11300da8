use serde::Serialize;

use crate::error::StatusError;
use crate::roster::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomColor {
    pub body: u32,
    pub feet: u32,
}

/// Appearance and authentication details of one connected player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerDetail {
    pub name: String,
    pub clan: String,
    /// `None` when the player uses the skin's own colors
    pub custom_color: Option<CustomColor>,
    pub skin: String,
    /// 0 = not authenticated
    pub auth_level: i32,
}

impl PlayerDetail {
    pub fn is_authed(&self) -> bool {
        self.auth_level > 0
    }
}

pub(crate) fn resolve_player<R: Roster + ?Sized>(
    roster: &R,
    name: &str,
) -> Result<PlayerDetail, StatusError> {
    let not_found = || StatusError::PlayerNotFound {
        name: name.to_string(),
    };
    let id = roster.find_by_name(name).ok_or_else(not_found)?;
    let slot = roster.slot(id).ok_or_else(not_found)?;

    Ok(PlayerDetail {
        name: slot.name.clone(),
        clan: slot.clan.clone(),
        custom_color: slot.use_custom_color.then_some(CustomColor {
            body: slot.color_body,
            feet: slot.color_feet,
        }),
        skin: slot.skin.clone(),
        auth_level: slot.auth_level,
    })
}

//! Status aggregation over the roster, the persistent war list and the
//! temporary overlay.
//!
//! The aggregator only reads its inputs; it never mutates the overlay or the
//! external collaborators.

mod online;
mod player;
mod report;

#[cfg(test)]
mod online_tests;

pub use online::{CategoryCount, OnlineCounts};
pub use player::{CustomColor, PlayerDetail};
pub use report::{render_online, render_player};

use crate::error::StatusError;
use crate::overlay::OverlayStore;
use crate::roster::{Roster, WarList};

/// Read-only view combining everything a status query needs.
pub struct StatusAggregator<'a, R: Roster + ?Sized, W: WarList + ?Sized> {
    roster: &'a R,
    war_list: &'a W,
    overlay: &'a OverlayStore,
}

impl<'a, R: Roster + ?Sized, W: WarList + ?Sized> StatusAggregator<'a, R, W> {
    pub fn new(roster: &'a R, war_list: &'a W, overlay: &'a OverlayStore) -> Self {
        Self {
            roster,
            war_list,
            overlay,
        }
    }

    /// Count war/helper/team/mute members currently on the server.
    pub fn online_info(&self) -> OnlineCounts {
        let counts = online::count_online(self.roster, self.war_list, self.overlay);
        tracing::debug!(?counts, "Computed online info");
        counts
    }

    /// Look up appearance and auth details for a connected player.
    pub fn player_info(&self, name: &str) -> Result<PlayerDetail, StatusError> {
        player::resolve_player(self.roster, name)
    }
}

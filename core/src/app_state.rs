use rosterwatch_types::ClientConfig;

use crate::config::load_client_config;
use crate::messages::MessageBuffer;
use crate::overlay::OverlayStore;
use crate::presence::{Presence, create_presence};
use crate::roster::RosterSnapshot;
use crate::status::StatusAggregator;

/// Everything a command adapter drives.
///
/// Hosts that share this across tasks must wrap it in a single lock: overlay
/// adds check the opposite side and insert in one step.
pub struct AppState {
    pub overlay: OverlayStore,
    pub config: ClientConfig,
    pub roster: RosterSnapshot,
    pub presence: Box<dyn Presence>,
    pub messages: MessageBuffer,
}

impl AppState {
    /// Build state from the stored client config.
    pub fn new(presence_available: bool) -> Self {
        Self::with_config(load_client_config(), presence_available)
    }

    pub fn with_config(config: ClientConfig, presence_available: bool) -> Self {
        let mut presence = create_presence(presence_available);
        presence.update(config.presence.enabled);
        Self {
            overlay: OverlayStore::new(),
            config,
            roster: RosterSnapshot::new(),
            presence,
            messages: MessageBuffer::new(),
        }
    }

    pub fn status(&self) -> StatusAggregator<'_, RosterSnapshot, RosterSnapshot> {
        StatusAggregator::new(&self.roster, &self.roster, &self.overlay)
    }

    /// Swap in a new roster and refresh presence with its size.
    ///
    /// An empty roster means no game is joined and publishes the idle activity.
    pub fn set_roster(&mut self, roster: RosterSnapshot) {
        if roster.slots.is_empty() {
            self.presence.clear_game_info("Not connected");
        } else {
            let detail = format!("{} players online", roster.slots.len());
            self.presence
                .set_game_info(&roster.map, &detail, self.config.presence.show_map);
        }
        self.roster = roster;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterSlot;

    #[test]
    fn test_set_roster_feeds_status_and_presence() {
        let mut state = AppState::with_config(ClientConfig::default(), true);
        let mut roster = RosterSnapshot::new().with_local_id(0);
        roster.map = "Kobra".to_string();
        roster.upsert_slot(RosterSlot::new(0, "me"));
        roster.upsert_slot(RosterSlot::new(1, "you"));
        state.set_roster(roster);

        let activity = state.presence.current_activity().unwrap();
        assert_eq!(activity.details, "2 players online");
        assert_eq!(activity.state.as_deref(), Some("Kobra"));

        state.overlay.add_war("you", &mut state.messages).unwrap();
        assert_eq!(state.status().online_info().wars.total, 1);
        assert_eq!(state.messages.drain().len(), 1);
    }

    #[test]
    fn test_empty_roster_publishes_idle_activity() {
        let mut state = AppState::with_config(ClientConfig::default(), true);
        let mut roster = RosterSnapshot::new();
        roster.upsert_slot(RosterSlot::new(0, "me"));
        state.set_roster(roster);
        assert_eq!(state.presence.current_activity().unwrap().details, "1 players online");

        state.set_roster(RosterSnapshot::new());
        let activity = state.presence.current_activity().unwrap();
        assert_eq!(activity.details, "Not connected");
        assert_eq!(activity.state, None);
    }

    #[test]
    fn test_presence_respects_config_toggle() {
        let mut config = ClientConfig::default();
        config.presence.enabled = false;
        let mut state = AppState::with_config(config, true);
        state.set_roster(RosterSnapshot::new());
        assert!(state.presence.current_activity().is_none());
    }
}

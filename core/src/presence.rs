//! Rich-presence publishing.
//!
//! The presence backend is optional at runtime. [`create_presence`] picks the
//! active implementation when the capability is available and a no-op
//! stand-in otherwise; everything else talks to the [`Presence`] trait only.

use chrono::{DateTime, Utc};
use serde::Serialize;

const IDLE_IMAGE: &str = "rw_image_idle";
const INGAME_IMAGE: &str = "rw_image";
const LARGE_TEXT: &str = "rosterwatch";

/// Activity payload handed to the presence backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub large_image: &'static str,
    pub large_text: &'static str,
    pub start: DateTime<Utc>,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Activity {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub trait Presence: Send + Sync {
    /// Enable or disable publishing. Disabling drops the current activity.
    fn update(&mut self, enabled: bool);

    /// Publish an idle activity (menus, not connected).
    fn clear_game_info(&mut self, detail: &str);

    /// Publish an in-game activity; the map is shown only when `show_map` is set.
    fn set_game_info(&mut self, map: &str, detail: &str, show_map: bool);

    fn current_activity(&self) -> Option<&Activity>;

    /// Whether a real backend is behind this handle.
    fn is_active(&self) -> bool;
}

/// Presence backed by a live activity.
#[derive(Debug)]
pub struct ActivityPresence {
    enabled: bool,
    started: DateTime<Utc>,
    activity: Option<Activity>,
}

impl ActivityPresence {
    pub fn new() -> Self {
        Self {
            enabled: false,
            started: Utc::now(),
            activity: None,
        }
    }

    fn publish(&mut self, activity: Activity) {
        match activity.to_json() {
            Ok(payload) => tracing::debug!(%payload, "Presence activity updated"),
            Err(e) => tracing::warn!(error = %e, "Failed to encode presence activity"),
        }
        self.activity = Some(activity);
    }
}

impl Default for ActivityPresence {
    fn default() -> Self {
        Self::new()
    }
}

impl Presence for ActivityPresence {
    fn update(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::info!(enabled, "Presence toggled");
            self.activity = None;
        }
        self.enabled = enabled;
    }

    fn clear_game_info(&mut self, detail: &str) {
        if !self.enabled {
            return;
        }
        self.publish(Activity {
            large_image: IDLE_IMAGE,
            large_text: LARGE_TEXT,
            start: self.started,
            details: detail.to_string(),
            state: None,
        });
    }

    fn set_game_info(&mut self, map: &str, detail: &str, show_map: bool) {
        if !self.enabled {
            return;
        }
        self.publish(Activity {
            large_image: INGAME_IMAGE,
            large_text: LARGE_TEXT,
            start: self.started,
            details: detail.to_string(),
            state: show_map.then(|| map.to_string()),
        });
    }

    fn current_activity(&self) -> Option<&Activity> {
        self.activity.as_ref()
    }

    fn is_active(&self) -> bool {
        true
    }
}

/// Stand-in used when no presence backend is available.
#[derive(Debug, Default)]
pub struct NoopPresence;

impl Presence for NoopPresence {
    fn update(&mut self, _enabled: bool) {}

    fn clear_game_info(&mut self, _detail: &str) {}

    fn set_game_info(&mut self, _map: &str, _detail: &str, _show_map: bool) {}

    fn current_activity(&self) -> Option<&Activity> {
        None
    }

    fn is_active(&self) -> bool {
        false
    }
}

/// Select the presence implementation once at startup.
pub fn create_presence(capability_available: bool) -> Box<dyn Presence> {
    if capability_available {
        Box::new(ActivityPresence::new())
    } else {
        tracing::warn!("Presence backend unavailable, using no-op presence");
        Box::new(NoopPresence)
    }
}

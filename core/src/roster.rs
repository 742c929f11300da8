//! Read-only views of the live player roster and the persistent war list.
//!
//! Both are owned elsewhere; the core only consults them. [`RosterSnapshot`]
//! is an in-memory implementation of both traits, loadable from TOML, that the
//! CLI and the tests use in place of a connected game client.

use serde::{Deserialize, Serialize};

/// Stable numeric id of a connected player's slot.
pub type SlotId = u32;

/// Team id meaning "not on any team".
pub const NO_TEAM: i32 = 0;

/// State of one connected player as seen by the local client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub id: SlotId,
    pub name: String,
    #[serde(default)]
    pub clan: String,
    /// Currently occupies a game slot (not spectating)
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub afk: bool,
    #[serde(default)]
    pub team: i32,
    #[serde(default = "default_skin")]
    pub skin: String,
    #[serde(default)]
    pub use_custom_color: bool,
    #[serde(default)]
    pub color_body: u32,
    #[serde(default)]
    pub color_feet: u32,
    /// 0 = not authenticated
    #[serde(default)]
    pub auth_level: i32,
}

fn default_skin() -> String {
    "default".to_string()
}

impl RosterSlot {
    pub fn new(id: SlotId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            clan: String::new(),
            active: true,
            afk: false,
            team: NO_TEAM,
            skin: default_skin(),
            use_custom_color: false,
            color_body: 0,
            color_feet: 0,
            auth_level: 0,
        }
    }
}

/// Persistent group membership of one slot, already resolved by identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarListEntry {
    pub war: bool,
    pub team: bool,
    pub helper: bool,
    pub muted: bool,
}

/// Live roster of connected players.
pub trait Roster {
    /// Every known slot, in no particular order.
    fn slots(&self) -> &[RosterSlot];

    /// The observer's own slot, excluded from all counts.
    fn local_id(&self) -> Option<SlotId>;

    /// Resolve a display name to a slot (exact, case-sensitive match).
    fn find_by_name(&self, name: &str) -> Option<SlotId> {
        self.slots().iter().find(|s| s.name == name).map(|s| s.id)
    }

    fn slot(&self, id: SlotId) -> Option<&RosterSlot> {
        self.slots().iter().find(|s| s.id == id)
    }
}

/// Persistent war list, keyed by slot id.
pub trait WarList {
    /// Group flags for a slot; unknown slots carry no membership.
    fn war_data(&self, id: SlotId) -> WarListEntry;
}

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// War list flags for one slot inside a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarListRecord {
    pub id: SlotId,
    #[serde(default)]
    pub war: bool,
    #[serde(default)]
    pub team: bool,
    #[serde(default)]
    pub helper: bool,
    #[serde(default)]
    pub muted: bool,
}

impl From<&WarListRecord> for WarListEntry {
    fn from(r: &WarListRecord) -> Self {
        Self {
            war: r.war,
            team: r.team,
            helper: r.helper,
            muted: r.muted,
        }
    }
}

/// Frozen roster plus war list, as written to and read from TOML.
///
/// ```toml
/// map = "Kobra"
/// local_id = 0
///
/// [[slots]]
/// id = 0
/// name = "me"
/// active = true
///
/// [[war_list]]
/// id = 3
/// war = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Map the snapshot was taken on
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub map: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<SlotId>,
    #[serde(default)]
    pub slots: Vec<RosterSlot>,
    #[serde(default)]
    pub war_list: Vec<WarListRecord>,
}

impl RosterSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_id(mut self, id: SlotId) -> Self {
        self.local_id = Some(id);
        self
    }

    /// Add or replace a slot.
    pub fn upsert_slot(&mut self, slot: RosterSlot) {
        match self.slots.iter_mut().find(|s| s.id == slot.id) {
            Some(existing) => *existing = slot,
            None => self.slots.push(slot),
        }
    }

    /// Set the persistent flags of a slot.
    pub fn set_war_data(&mut self, id: SlotId, entry: WarListEntry) {
        let record = WarListRecord {
            id,
            war: entry.war,
            team: entry.team,
            helper: entry.helper,
            muted: entry.muted,
        };
        match self.war_list.iter_mut().find(|r| r.id == id) {
            Some(existing) => *existing = record,
            None => self.war_list.push(record),
        }
    }
}

impl Roster for RosterSnapshot {
    fn slots(&self) -> &[RosterSlot] {
        &self.slots
    }

    fn local_id(&self) -> Option<SlotId> {
        self.local_id
    }
}

impl WarList for RosterSnapshot {
    fn war_data(&self, id: SlotId) -> WarListEntry {
        self.war_list
            .iter()
            .find(|r| r.id == id)
            .map(WarListEntry::from)
            .unwrap_or_default()
    }
}

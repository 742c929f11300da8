//! Classification counts over the live roster.
//!
//! Each category gets its own pass over the roster. A slot counts toward War
//! or Helper when exactly one of {persistent flag, temporary flag} is set: the
//! temporary overlay flips the persistent classification instead of adding to
//! it. Team has no temporary counterpart and uses the persistent flag alone.

use serde::Serialize;

use crate::overlay::{OverlayStore, TempFlags};
use crate::roster::{NO_TEAM, Roster, RosterSlot, SlotId, WarList, WarListEntry};

/// Total and away-from-keyboard count for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub total: u32,
    pub afk: u32,
}

impl CategoryCount {
    /// Members that are not AFK.
    pub fn active(&self) -> u32 {
        self.total.saturating_sub(self.afk)
    }

    fn record(&mut self, afk: bool) {
        self.total += 1;
        if afk {
            self.afk += 1;
        }
    }
}

/// Result of an online scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OnlineCounts {
    pub teams: CategoryCount,
    pub wars: CategoryCount,
    pub helpers: CategoryCount,
    pub mutes: CategoryCount,
}

/// Spectators and unassigned slots take no part in war/helper/team counts.
fn takes_part(slot: &RosterSlot) -> bool {
    slot.active || slot.team != NO_TEAM
}

/// Muting is independent of team formation: only the active flag gates it.
fn takes_part_muted(slot: &RosterSlot) -> bool {
    slot.active
}

fn scan<F, G>(slots: &[RosterSlot], local_id: Option<SlotId>, include: F, matches: G) -> CategoryCount
where
    F: Fn(&RosterSlot) -> bool,
    G: Fn(&RosterSlot) -> bool,
{
    let mut count = CategoryCount::default();
    for slot in slots {
        if !include(slot) {
            continue;
        }
        if Some(slot.id) == local_id {
            continue;
        }
        if matches(slot) {
            count.record(slot.afk);
        }
    }
    count
}

pub(crate) fn count_online<R, W>(roster: &R, war_list: &W, overlay: &OverlayStore) -> OnlineCounts
where
    R: Roster + ?Sized,
    W: WarList + ?Sized,
{
    let slots = roster.slots();
    let local_id = roster.local_id();
    let persistent = |slot: &RosterSlot| -> WarListEntry { war_list.war_data(slot.id) };
    let temp = |slot: &RosterSlot| -> TempFlags { overlay.flags_for(&slot.name) };

    let wars = scan(slots, local_id, takes_part, |s| persistent(s).war != temp(s).war);
    let teams = scan(slots, local_id, takes_part, |s| persistent(s).team);
    let helpers = scan(slots, local_id, takes_part, |s| {
        persistent(s).helper != temp(s).helper
    });
    let mutes = scan(slots, local_id, takes_part_muted, |s| {
        persistent(s).muted != temp(s).mute
    });

    OnlineCounts {
        teams,
        wars,
        helpers,
        mutes,
    }
}

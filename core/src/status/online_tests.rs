//! Scenario tests for online counting and player lookup.

use super::*;
use crate::messages::MessageBuffer;
use crate::roster::{RosterSlot, RosterSnapshot, WarListEntry};

fn slot(id: u32, name: &str, active: bool, afk: bool, team: i32) -> RosterSlot {
    RosterSlot {
        active,
        afk,
        team,
        ..RosterSlot::new(id, name)
    }
}

fn war() -> WarListEntry {
    WarListEntry {
        war: true,
        ..Default::default()
    }
}

fn counts(snap: &RosterSnapshot, overlay: &OverlayStore) -> OnlineCounts {
    StatusAggregator::new(snap, snap, overlay).online_info()
}

// ─────────────────────────────────────────────────────────────────────────────
// XOR rule
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_temp_war_counts_afk_separately() {
    let mut snap = RosterSnapshot::new().with_local_id(9);
    snap.upsert_slot(slot(0, "A", true, false, 1));
    snap.upsert_slot(slot(1, "B", true, true, 1));
    snap.set_war_data(0, war());

    let mut overlay = OverlayStore::new();
    overlay.add_war("B", &mut MessageBuffer::new()).unwrap();

    let result = counts(&snap, &overlay);
    assert_eq!(result.wars.total, 2);
    assert_eq!(result.wars.active(), 1);
}

#[test]
fn test_temp_war_on_persistent_war_cancels() {
    let mut snap = RosterSnapshot::new();
    snap.upsert_slot(slot(0, "A", true, false, 1));
    snap.set_war_data(0, war());

    let mut overlay = OverlayStore::new();
    assert_eq!(counts(&snap, &overlay).wars.total, 1);

    overlay.add_war("A", &mut MessageBuffer::new()).unwrap();
    assert_eq!(counts(&snap, &overlay).wars.total, 0);
}

#[test]
fn test_helper_and_mute_follow_xor() {
    let mut snap = RosterSnapshot::new();
    snap.upsert_slot(slot(0, "H", true, false, 0));
    snap.upsert_slot(slot(1, "M", true, false, 0));
    snap.set_war_data(
        0,
        WarListEntry {
            helper: true,
            ..Default::default()
        },
    );

    let mut overlay = OverlayStore::new();
    let mut sink = MessageBuffer::new();
    overlay.add_helper("H", &mut sink).unwrap();
    overlay.add_mute("M", &mut sink).unwrap();

    let result = counts(&snap, &overlay);
    assert_eq!(result.helpers.total, 0);
    assert_eq!(result.mutes.total, 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Inclusion rules
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_observer_never_counted() {
    let mut snap = RosterSnapshot::new().with_local_id(0);
    snap.upsert_slot(slot(0, "me", true, false, 1));
    snap.set_war_data(
        0,
        WarListEntry {
            war: true,
            team: true,
            helper: false,
            muted: true,
        },
    );
    let mut overlay = OverlayStore::new();
    overlay.add_helper("me", &mut MessageBuffer::new()).unwrap();

    assert_eq!(counts(&snap, &overlay), OnlineCounts::default());
}

#[test]
fn test_inactive_spectator_skipped_but_inactive_teamed_counted() {
    let mut snap = RosterSnapshot::new();
    snap.upsert_slot(slot(0, "spec", false, false, 0));
    snap.upsert_slot(slot(1, "teamed", false, false, 3));
    snap.set_war_data(0, war());
    snap.set_war_data(1, war());

    let result = counts(&snap, &OverlayStore::new());
    assert_eq!(result.wars.total, 1);
}

#[test]
fn test_mute_gated_only_by_active() {
    let muted = WarListEntry {
        muted: true,
        ..Default::default()
    };
    let mut snap = RosterSnapshot::new();
    // Active, no team: counted for mute
    snap.upsert_slot(slot(0, "a", true, true, 0));
    // Inactive but on a team: not counted for mute
    snap.upsert_slot(slot(1, "b", false, false, 2));
    snap.set_war_data(0, muted);
    snap.set_war_data(1, muted);

    let result = counts(&snap, &OverlayStore::new());
    assert_eq!(result.mutes.total, 1);
    assert_eq!(result.mutes.afk, 1);
    assert_eq!(result.mutes.active(), 0);
}

#[test]
fn test_team_uses_persistent_flag_only() {
    let mut snap = RosterSnapshot::new();
    snap.upsert_slot(slot(0, "mate", true, false, 1));
    snap.upsert_slot(slot(1, "other", true, false, 1));
    snap.set_war_data(
        0,
        WarListEntry {
            team: true,
            ..Default::default()
        },
    );

    let mut overlay = OverlayStore::new();
    overlay.add_war("mate", &mut MessageBuffer::new()).unwrap();

    let result = counts(&snap, &overlay);
    assert_eq!(result.teams.total, 1);
    assert_eq!(result.wars.total, 1);
}

#[test]
fn test_counts_independent_of_slot_order() {
    let slots = vec![
        slot(0, "A", true, false, 1),
        slot(1, "B", true, true, 1),
        slot(2, "C", false, false, 0),
        slot(3, "D", true, false, 0),
        slot(4, "E", false, true, 5),
    ];
    let mut overlay = OverlayStore::new();
    let mut sink = MessageBuffer::new();
    overlay.add_war("B", &mut sink).unwrap();
    overlay.add_helper("D", &mut sink).unwrap();
    overlay.add_mute("A", &mut sink).unwrap();

    let build = |order: &[usize]| {
        let mut snap = RosterSnapshot::new().with_local_id(3);
        for &i in order {
            snap.upsert_slot(slots[i].clone());
        }
        snap.set_war_data(4, war());
        snap.set_war_data(2, war());
        snap
    };

    let forward = counts(&build(&[0, 1, 2, 3, 4]), &overlay);
    let reversed = counts(&build(&[4, 3, 2, 1, 0]), &overlay);
    let shuffled = counts(&build(&[2, 0, 4, 1, 3]), &overlay);
    assert_eq!(forward, reversed);
    assert_eq!(forward, shuffled);
    assert_eq!(forward.wars.total, 2);
    assert_eq!(forward.helpers.total, 0);
}

#[test]
fn test_active_count_saturates() {
    let counted = CategoryCount { total: 3, afk: 1 };
    assert_eq!(counted.active(), 2);

    // Hand-built counts can carry more AFK than total
    let inconsistent = CategoryCount { total: 0, afk: 1 };
    assert_eq!(inconsistent.active(), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Player info
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_player_info_unknown_name() {
    let mut snap = RosterSnapshot::new();
    snap.upsert_slot(slot(0, "Alice", true, false, 0));
    let overlay = OverlayStore::new();

    let err = StatusAggregator::new(&snap, &snap, &overlay)
        .player_info("Ghost")
        .unwrap_err();
    assert_eq!(
        err,
        StatusError::PlayerNotFound {
            name: "Ghost".to_string()
        }
    );
}

#[test]
fn test_player_info_details() {
    let mut snap = RosterSnapshot::new();
    snap.upsert_slot(RosterSlot {
        clan: "Tee".to_string(),
        skin: "santa".to_string(),
        use_custom_color: true,
        color_body: 123,
        color_feet: 456,
        auth_level: 3,
        ..RosterSlot::new(7, "Alice")
    });
    let overlay = OverlayStore::new();

    let detail = StatusAggregator::new(&snap, &snap, &overlay)
        .player_info("Alice")
        .unwrap();
    assert_eq!(detail.name, "Alice");
    assert_eq!(detail.clan, "Tee");
    assert_eq!(detail.skin, "santa");
    assert_eq!(
        detail.custom_color,
        Some(CustomColor {
            body: 123,
            feet: 456
        })
    );
    assert!(detail.is_authed());
}

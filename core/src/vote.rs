use serde::Serialize;

use crate::error::VoteError;
use crate::roster::{Roster, SlotId};

/// A vote the client should call on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub kind: &'static str,
    pub target_id: SlotId,
    pub reason: String,
}

/// Build a kick vote against the player with exactly this name.
pub fn votekick<R: Roster + ?Sized>(
    roster: &R,
    name: &str,
    reason: &str,
) -> Result<VoteRequest, VoteError> {
    let target_id = roster
        .find_by_name(name)
        .ok_or_else(|| VoteError::PlayerNotFound {
            name: name.to_string(),
        })?;

    tracing::info!(target_id, name = %name, "Calling kick vote");
    Ok(VoteRequest {
        kind: "kick",
        target_id,
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{RosterSlot, RosterSnapshot};

    #[test]
    fn test_votekick_resolves_exact_name() {
        let mut snap = RosterSnapshot::new();
        snap.upsert_slot(RosterSlot::new(12, "griefer"));

        let vote = votekick(&snap, "griefer", "blocking").unwrap();
        assert_eq!(vote.kind, "kick");
        assert_eq!(vote.target_id, 12);
        assert_eq!(vote.reason, "blocking");

        let err = votekick(&snap, "Griefer", "").unwrap_err();
        assert_eq!(err.to_string(), "No player with this name found.");
    }
}

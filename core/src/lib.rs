pub mod app_state;
pub mod config;
pub mod error;
pub mod messages;
pub mod overlay;
pub mod presence;
pub mod rainbow;
pub mod roster;
pub mod skin;
pub mod status;
pub mod vote;

// Re-exports for convenience
pub use error::{ConfigError, OverlayError, SkinError, StatusError, VoteError};
pub use messages::{MessageBuffer, MessageSink};
pub use overlay::{OverlayStore, TempEntry, TempFlags};
pub use roster::{Roster, RosterSlot, RosterSnapshot, SlotId, WarList, WarListEntry};
pub use rosterwatch_types::Category;
pub use status::{OnlineCounts, PlayerDetail, StatusAggregator};

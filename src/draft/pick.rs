// Individual pick records for the draft log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single made pick. The draft log is an append-only ordered sequence of
/// these; the board geometry (who picks when) is derived arithmetic and is
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPick {
    /// One-based overall pick number (zero-based pick index + 1).
    pub pick_number: u32,
    /// "round.pick" slot label (e.g. "2.05").
    pub label: String,
    /// Participant that made the pick.
    pub team_id: String,
    /// When the pick was made.
    pub made_at: DateTime<Utc>,
    /// True when the pick clock expired and the slot auto-advanced rather
    /// than being locked in by a command.
    pub auto: bool,
}

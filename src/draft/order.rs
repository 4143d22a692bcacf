// The immutable draft order.

use serde::{Deserialize, Serialize};

use super::snake::{self, SnakeError};

/// Ordered sequence of participant identifiers, fixed for the life of a
/// draft session. Constructed once and consumed read-only by every
/// pick-index lookup; the draft's progress lives in `DraftState`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOrder(Vec<String>);

impl DraftOrder {
    /// Build a draft order. Fails fast on an empty team list.
    pub fn new(teams: Vec<String>) -> Result<Self, SnakeError> {
        if teams.is_empty() {
            return Err(SnakeError::EmptyOrder);
        }
        Ok(DraftOrder(teams))
    }

    pub fn team_count(&self) -> usize {
        self.0.len()
    }

    pub fn teams(&self) -> &[String] {
        &self.0
    }

    /// Participant on the clock for an overall pick index.
    pub fn team_for_pick(&self, pick_index: usize) -> Result<&str, SnakeError> {
        snake::team_for_pick(pick_index, &self.0).map(String::as_str)
    }
}

// Draft state: the fixed board geometry plus the append-only pick log.
//
// The board itself (who is on the clock for which slot) is never stored;
// it is derived from the immutable order via the snake arithmetic. Only
// the made picks are state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::order::DraftOrder;
use super::pick::DraftPick;
use super::snake::{self, SnakeError};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StateError {
    #[error("rounds must be at least 1")]
    ZeroRounds,

    #[error("draft is already complete ({total} picks made)")]
    DraftComplete { total: usize },

    #[error("pick log out of sequence: expected pick {expected}, got {got}")]
    OutOfSequence { expected: u32, got: u32 },

    #[error("pick {pick_number} belongs to '{expected}', log says '{got}'")]
    WrongTeam {
        pick_number: u32,
        expected: String,
        got: String,
    },

    #[error(transparent)]
    Snake(#[from] SnakeError),
}

// ---------------------------------------------------------------------------
// DraftState
// ---------------------------------------------------------------------------

/// The complete state of a snake draft: immutable order and round count,
/// plus the picks made so far in overall order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftState {
    order: DraftOrder,
    rounds: usize,
    picks: Vec<DraftPick>,
}

impl DraftState {
    /// Create a fresh draft board for the given order and round count.
    pub fn new(order: DraftOrder, rounds: usize) -> Result<Self, StateError> {
        if rounds == 0 {
            return Err(StateError::ZeroRounds);
        }
        Ok(DraftState {
            order,
            rounds,
            picks: Vec::new(),
        })
    }

    pub fn order(&self) -> &DraftOrder {
        &self.order
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Total number of picks in the draft (`teams * rounds`).
    pub fn total_picks(&self) -> usize {
        self.order.team_count() * self.rounds
    }

    /// Number of picks made so far.
    pub fn pick_count(&self) -> usize {
        self.picks.len()
    }

    pub fn is_complete(&self) -> bool {
        self.picks.len() >= self.total_picks()
    }

    /// All recorded picks in overall order.
    pub fn picks(&self) -> &[DraftPick] {
        &self.picks
    }

    /// Zero-based index of the next pick, or `None` once the board is full.
    pub fn next_pick_index(&self) -> Option<usize> {
        if self.is_complete() {
            None
        } else {
            Some(self.picks.len())
        }
    }

    /// One-based number of the next pick, for display and tick events.
    pub fn next_pick_number(&self) -> Option<u32> {
        self.next_pick_index().map(|i| i as u32 + 1)
    }

    /// Participant on the clock for the next pick, or `None` once complete.
    pub fn on_the_clock(&self) -> Option<&str> {
        let idx = self.next_pick_index()?;
        // Order is non-empty by construction, so the lookup cannot fail.
        self.order.team_for_pick(idx).ok()
    }

    /// "round.pick" label of the next slot, or `None` once complete.
    pub fn current_label(&self) -> Option<String> {
        let idx = self.next_pick_index()?;
        snake::format_round_pick(idx, self.order.team_count()).ok()
    }

    /// Record the next pick on the board. The participant and label are
    /// derived from the snake arithmetic, not caller-supplied, so the log
    /// cannot drift out of order.
    pub fn record_next(
        &mut self,
        made_at: DateTime<Utc>,
        auto: bool,
    ) -> Result<&DraftPick, StateError> {
        let idx = self.next_pick_index().ok_or(StateError::DraftComplete {
            total: self.total_picks(),
        })?;
        let team_id = self.order.team_for_pick(idx)?.to_string();
        let label = snake::format_round_pick(idx, self.order.team_count())?;
        debug!("Recording pick {} ({}) for {}", idx + 1, label, team_id);
        self.picks.push(DraftPick {
            pick_number: idx as u32 + 1,
            label,
            team_id,
            made_at,
            auto,
        });
        Ok(&self.picks[idx])
    }

    /// Picks made by one participant, in the order they were made.
    pub fn picks_for_team(&self, team_id: &str) -> Vec<&DraftPick> {
        self.picks.iter().filter(|p| p.team_id == team_id).collect()
    }

    /// Restore the draft state by replaying a saved pick log.
    ///
    /// Each entry is validated against the board: pick numbers must be the
    /// contiguous sequence 1, 2, ... and each team must match what the
    /// snake arithmetic assigns to that slot. A log that disagrees with the
    /// board is rejected rather than silently patched.
    pub fn restore_from_picks(&mut self, picks: Vec<DraftPick>) -> Result<(), StateError> {
        self.picks.clear();
        for pick in picks {
            let expected = self.next_pick_number().ok_or(StateError::DraftComplete {
                total: self.total_picks(),
            })?;
            if pick.pick_number != expected {
                return Err(StateError::OutOfSequence {
                    expected,
                    got: pick.pick_number,
                });
            }
            let idx = (pick.pick_number - 1) as usize;
            let expected_team = self.order.team_for_pick(idx)?;
            if pick.team_id != expected_team {
                warn!(
                    "Pick log mismatch at {}: board says '{}', log says '{}'",
                    pick.pick_number, expected_team, pick.team_id
                );
                return Err(StateError::WrongTeam {
                    pick_number: pick.pick_number,
                    expected: expected_team.to_string(),
                    got: pick.team_id,
                });
            }
            self.picks.push(pick);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

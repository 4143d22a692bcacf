// Snake draft order arithmetic.
//
// Pure translation between a zero-based overall pick index and the
// (round, pick-in-round, seat) triple for a fixed team count. Rounds are
// one-based; odd rounds walk the draft order forward, even rounds walk it
// in reverse. Every call site that needs this arithmetic goes through
// here rather than inlining its own copy of the formulas.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnakeError {
    #[error("team order must not be empty")]
    EmptyOrder,

    #[error("team count must be greater than 0")]
    ZeroTeams,

    #[error("round must be at least 1")]
    ZeroRound,

    #[error("pick {pick_in_round} out of range for {team_count} teams")]
    PickOutOfRange {
        pick_in_round: usize,
        team_count: usize,
    },
}

// ---------------------------------------------------------------------------
// Round/pick labels
// ---------------------------------------------------------------------------

/// Human-facing draft slot: one-based round and pick within the round.
/// Renders as "round.pick" with the pick zero-padded to two digits, so
/// round 2 pick 5 displays as "2.05".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundPick {
    pub round: usize,
    pub pick_in_round: usize,
}

impl fmt::Display for RoundPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.round, self.pick_in_round)
    }
}

// ---------------------------------------------------------------------------
// Resolver functions
// ---------------------------------------------------------------------------

/// Seat index (position in the draft order) on the clock for an overall
/// pick index.
///
/// Odd rounds walk seats `0..T-1` in order; even rounds walk them in
/// reverse. `pick_index` is not bounded above: callers that care about the
/// end of the draft stop at `team_count * rounds` themselves.
pub fn seat_for_pick(pick_index: usize, team_count: usize) -> Result<usize, SnakeError> {
    if team_count == 0 {
        return Err(SnakeError::ZeroTeams);
    }
    let round = pick_index / team_count + 1;
    let slot = pick_index % team_count;
    if round % 2 == 1 {
        Ok(slot)
    } else {
        Ok(team_count - 1 - slot)
    }
}

/// Participant on the clock for an overall pick index, given the immutable
/// draft order. Fails fast on an empty order rather than silently
/// returning an out-of-range seat.
pub fn team_for_pick<T>(pick_index: usize, team_order: &[T]) -> Result<&T, SnakeError> {
    if team_order.is_empty() {
        return Err(SnakeError::EmptyOrder);
    }
    let seat = seat_for_pick(pick_index, team_order.len())?;
    Ok(&team_order[seat])
}

/// Round and pick-in-round for an overall pick index.
pub fn round_pick(pick_index: usize, team_count: usize) -> Result<RoundPick, SnakeError> {
    if team_count == 0 {
        return Err(SnakeError::ZeroTeams);
    }
    Ok(RoundPick {
        round: pick_index / team_count + 1,
        pick_in_round: pick_index % team_count + 1,
    })
}

/// Display label for an overall pick index (pick 12 of a 12-team draft is
/// "2.01"). Formatting only; no state transition.
pub fn format_round_pick(pick_index: usize, team_count: usize) -> Result<String, SnakeError> {
    round_pick(pick_index, team_count).map(|rp| rp.to_string())
}

/// Inverse of [`round_pick`]: the overall pick index for a one-based
/// (round, pick-in-round) slot.
pub fn overall_pick(
    round: usize,
    pick_in_round: usize,
    team_count: usize,
) -> Result<usize, SnakeError> {
    if team_count == 0 {
        return Err(SnakeError::ZeroTeams);
    }
    if round == 0 {
        return Err(SnakeError::ZeroRound);
    }
    if pick_in_round == 0 || pick_in_round > team_count {
        return Err(SnakeError::PickOutOfRange {
            pick_in_round,
            team_count,
        });
    }
    Ok((round - 1) * team_count + (pick_in_round - 1))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The match state machine.
//!
//! Statuses only advance forward: `NotStarted` → `InProgress` → `Finished`.
//! Transitions take the current match by reference and return a new match;
//! they either succeed completely or fail without side effects.

use crate::error::EngineError;
use matchpoint_domain::{Match, MatchStatus, Side};

/// Games a side must win to take the match. First to six, no margin.
pub const GAMES_TO_WIN: u8 = 6;

/// Verifies that the match has not been started yet.
///
/// Guard for the edit, delete, and start flows.
///
/// # Errors
///
/// Returns `EngineError::AlreadyStartedOrFinished` unless the match is in the
/// `NotStarted` state.
pub const fn require_not_started(current: &Match) -> Result<(), EngineError> {
    match current.status {
        MatchStatus::NotStarted => Ok(()),
        MatchStatus::InProgress | MatchStatus::Finished => {
            Err(EngineError::AlreadyStartedOrFinished { id: current.id })
        }
    }
}

/// Verifies that the match is currently in progress.
///
/// Guard for the scoring flow.
///
/// # Errors
///
/// Returns `EngineError::NotInProgress` unless the match is in the
/// `InProgress` state.
pub const fn require_in_progress(current: &Match) -> Result<(), EngineError> {
    match current.status {
        MatchStatus::InProgress => Ok(()),
        MatchStatus::NotStarted | MatchStatus::Finished => {
            Err(EngineError::NotInProgress { id: current.id })
        }
    }
}

/// Starts a match, transitioning it from `NotStarted` to `InProgress`.
///
/// Scores are untouched.
///
/// # Errors
///
/// Returns `EngineError::AlreadyStartedOrFinished` if the match has already
/// been started or is finished.
pub fn start(current: &Match) -> Result<Match, EngineError> {
    if !current.status.can_transition_to(MatchStatus::InProgress) {
        return Err(EngineError::AlreadyStartedOrFinished { id: current.id });
    }

    let mut started: Match = current.clone();
    started.status = MatchStatus::InProgress;
    Ok(started)
}

/// Records a game won by `winner`: resets both point counters, re-derives the
/// labels, and increments the winner's games-won counter. Reaching
/// [`GAMES_TO_WIN`] finishes the match; this is the only path to `Finished`.
///
/// Called only by the scoring engine, which guarantees the match is in
/// progress and the counters are within range.
pub(crate) fn finish_game(current: &mut Match, winner: Side) -> Result<(), EngineError> {
    current.set_points(Side::Local, 0);
    current.set_points(Side::Visitor, 0);
    current.refresh_labels()?;

    current.increment_games_won(winner);
    if current.games_won(winner) == GAMES_TO_WIN {
        current.status = MatchStatus::Finished;
    }
    Ok(())
}

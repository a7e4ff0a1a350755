// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The scoring engine.
//!
//! Points are integers in `0..=4` with 4 overloaded as Advantage, which
//! collapses deuce/advantage handling into the same increment/decrement
//! logic as ordinary point scoring. Two defensive checks reject counters
//! that already violate the Advantage invariant.

use crate::error::EngineError;
use crate::lifecycle::{finish_game, require_in_progress};
use matchpoint_domain::{Match, SCORE_ADVANTAGE, SCORE_FORTY, Side};

/// Applies one point for `side`, enforcing tennis point progression and
/// deuce/advantage legality. When the point decides the game, the winning
/// side's games-won counter advances and, at six games, the match finishes.
///
/// The input match is untouched; the mutated match is returned. Either the
/// whole point-plus-game-completion sequence applies or nothing changes.
///
/// # Errors
///
/// Returns an error if:
/// - The match is not in progress (`NotInProgress`)
/// - The point counters already violate the Advantage invariant
///   (`ImpossibleScore`)
pub fn add_point(current: &Match, side: Side) -> Result<Match, EngineError> {
    require_in_progress(current)?;

    let mut scored: Match = current.clone();
    let opponent: Side = side.opponent();

    if scored.points(opponent) == SCORE_ADVANTAGE {
        // Scoring against an Advantage brings the game back to deuce. That
        // is only representable if the scoring side stands at 40.
        if scored.points(side) != SCORE_FORTY {
            return Err(impossible_score(&scored));
        }
        scored.set_points(opponent, scored.points(opponent) - 1);
    } else {
        // The scoring side cannot already hold Advantage unless the opponent
        // is exactly at 40.
        if scored.points(side) == SCORE_ADVANTAGE && scored.points(opponent) != SCORE_FORTY {
            return Err(impossible_score(&scored));
        }
        scored.set_points(side, scored.points(side) + 1);
    }

    // Converting one's own Advantage pushes the counter one past 4, so the
    // win check must resolve the game (resetting the counters and labels)
    // before the labels are derived for the still-open game.
    if !settle_game(&mut scored)? {
        scored.refresh_labels()?;
    }
    Ok(scored)
}

/// Checks whether the current counters decide the game and, if so, records
/// the game for the leading side. Returns whether a game was completed.
///
/// A game is won with at least four points and a lead of at least two. This
/// covers both the clean win (4 points against 2 or fewer) and the
/// post-deuce Advantage conversion.
fn settle_game(scored: &mut Match) -> Result<bool, EngineError> {
    let local: u8 = scored.points(Side::Local);
    let visiting: u8 = scored.points(Side::Visitor);

    if local.abs_diff(visiting) >= 2 {
        if local > visiting && local >= SCORE_ADVANTAGE {
            finish_game(scored, Side::Local)?;
            return Ok(true);
        }
        if visiting > local && visiting >= SCORE_ADVANTAGE {
            finish_game(scored, Side::Visitor)?;
            return Ok(true);
        }
    }
    Ok(false)
}

const fn impossible_score(scored: &Match) -> EngineError {
    EngineError::ImpossibleScore {
        local_points: scored.points(Side::Local),
        visiting_points: scored.points(Side::Visitor),
    }
}

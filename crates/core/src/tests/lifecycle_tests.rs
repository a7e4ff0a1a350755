// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for lifecycle transitions and wrong-state guards.

use crate::{EngineError, require_in_progress, require_not_started, start};
use matchpoint_domain::{Match, MatchId, MatchStatus};

use super::helpers::{create_in_progress_match, create_scheduled_match};

#[test]
fn test_start_transitions_to_in_progress() {
    let scheduled: Match = create_scheduled_match();

    let started: Match = start(&scheduled).unwrap();

    assert_eq!(started.status, MatchStatus::InProgress);
    // Scores are untouched by the transition.
    assert_eq!(started.local_points, 0);
    assert_eq!(started.visiting_points, 0);
    assert_eq!(started.local_games_won, 0);
    assert_eq!(started.visiting_games_won, 0);
}

#[test]
fn test_start_leaves_input_match_untouched() {
    let scheduled: Match = create_scheduled_match();

    let _started: Match = start(&scheduled).unwrap();

    assert_eq!(scheduled.status, MatchStatus::NotStarted);
}

#[test]
fn test_start_rejects_in_progress_match() {
    let in_progress: Match = create_in_progress_match();

    let result: Result<Match, EngineError> = start(&in_progress);

    assert!(matches!(
        result.unwrap_err(),
        EngineError::AlreadyStartedOrFinished {
            id: Some(id)
        } if id == MatchId::new(1)
    ));
}

#[test]
fn test_start_rejects_finished_match() {
    let mut finished: Match = create_in_progress_match();
    finished.status = MatchStatus::Finished;

    let result: Result<Match, EngineError> = start(&finished);

    assert!(matches!(
        result.unwrap_err(),
        EngineError::AlreadyStartedOrFinished { .. }
    ));
}

#[test]
fn test_require_not_started_accepts_scheduled_match() {
    let scheduled: Match = create_scheduled_match();
    assert!(require_not_started(&scheduled).is_ok());
}

#[test]
fn test_require_not_started_rejects_started_and_finished() {
    let in_progress: Match = create_in_progress_match();
    assert!(matches!(
        require_not_started(&in_progress).unwrap_err(),
        EngineError::AlreadyStartedOrFinished { .. }
    ));

    let mut finished: Match = create_in_progress_match();
    finished.status = MatchStatus::Finished;
    assert!(matches!(
        require_not_started(&finished).unwrap_err(),
        EngineError::AlreadyStartedOrFinished { .. }
    ));
}

#[test]
fn test_require_in_progress_accepts_started_match() {
    let in_progress: Match = create_in_progress_match();
    assert!(require_in_progress(&in_progress).is_ok());
}

#[test]
fn test_require_in_progress_rejects_scheduled_and_finished() {
    let scheduled: Match = create_scheduled_match();
    assert!(matches!(
        require_in_progress(&scheduled).unwrap_err(),
        EngineError::NotInProgress { .. }
    ));

    let mut finished: Match = create_in_progress_match();
    finished.status = MatchStatus::Finished;
    assert!(matches!(
        require_in_progress(&finished).unwrap_err(),
        EngineError::NotInProgress { .. }
    ));
}

#[test]
fn test_engine_error_display() {
    let err: EngineError = EngineError::AlreadyStartedOrFinished {
        id: Some(MatchId::new(3)),
    };
    assert_eq!(
        format!("{err}"),
        "Match 3 is already in progress or is finished"
    );

    let err: EngineError = EngineError::NotInProgress { id: None };
    assert_eq!(format!("{err}"), "Match is not in progress");

    let err: EngineError = EngineError::ImpossibleScore {
        local_points: 4,
        visiting_points: 1,
    };
    assert_eq!(format!("{err}"), "Impossible score: local=4, visiting=1");
}

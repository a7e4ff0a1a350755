// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchpoint_domain::{DomainError, MatchId};

/// Errors that can occur during lifecycle transitions and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A start, edit, or delete was attempted on a match that is already
    /// in progress or finished.
    AlreadyStartedOrFinished {
        /// The match identifier, if persisted.
        id: Option<MatchId>,
    },
    /// A point was scored on a match that is not in progress.
    NotInProgress {
        /// The match identifier, if persisted.
        id: Option<MatchId>,
    },
    /// The point counters already violate the Advantage invariant.
    ///
    /// This never fires in a correctly-driven engine; it signals a corrupted
    /// match state.
    ImpossibleScore {
        /// The local point counter at the time of the failure.
        local_points: u8,
        /// The visiting point counter at the time of the failure.
        visiting_points: u8,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyStartedOrFinished { id } => match id {
                Some(id) => write!(
                    f,
                    "Match {} is already in progress or is finished",
                    id.value()
                ),
                None => write!(f, "Match is already in progress or is finished"),
            },
            Self::NotInProgress { id } => match id {
                Some(id) => write!(f, "Match {} is not in progress", id.value()),
                None => write!(f, "Match is not in progress"),
            },
            Self::ImpossibleScore {
                local_points,
                visiting_points,
            } => {
                write!(
                    f,
                    "Impossible score: local={local_points}, visiting={visiting_points}"
                )
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CourtId, PlayerId};
use chrono::{DateTime, Utc};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or both player identifiers are absent.
    PlayersMissing,
    /// The local and visiting player identifiers are the same.
    PlayersDuplicated(PlayerId),
    /// No court has been assigned to the match.
    CourtMissing,
    /// The start time is strictly in the past.
    InvalidStartTime {
        /// The rejected start time.
        start_time: DateTime<Utc>,
    },
    /// Another match on the same court starts within the minimum separation window.
    ScheduleConflict {
        /// The contested court.
        court: CourtId,
        /// The start time of the existing match that blocks the slot.
        existing_start: DateTime<Utc>,
    },
    /// A point counter left the representable range 0..=4.
    InvalidPointValue {
        /// The out-of-range point value.
        points: u8,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayersMissing => {
                write!(f, "Both players must be assigned to the match")
            }
            Self::PlayersDuplicated(player) => {
                write!(
                    f,
                    "Local and visiting players must be distinct, got player {} twice",
                    player.value()
                )
            }
            Self::CourtMissing => write!(f, "A court must be assigned to the match"),
            Self::InvalidStartTime { start_time } => {
                write!(
                    f,
                    "Start time {start_time} must not be earlier than the current time"
                )
            }
            Self::ScheduleConflict {
                court,
                existing_start,
            } => {
                write!(
                    f,
                    "Court {} already hosts a match starting at {existing_start} within the minimum separation window",
                    court.value()
                )
            }
            Self::InvalidPointValue { points } => {
                write!(f, "Point value {points} is outside the valid range 0..=4")
            }
        }
    }
}

impl std::error::Error for DomainError {}

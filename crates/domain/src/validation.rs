// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure, independent match-validation rules.
//!
//! Each function checks exactly one rule and fails with a specific
//! [`DomainError`] reason. The service layer composes them into the
//! creation and edit validation chains.

use crate::error::DomainError;
use crate::types::{CourtId, Match, PlayerId};
use chrono::{DateTime, Utc};

/// Minimum separation, in whole hours, between two matches on the same court.
pub const MIN_SEPARATION_HOURS: i64 = 4;

/// Validates that both players are assigned and distinct.
///
/// # Arguments
///
/// * `local` - The local player, if assigned
/// * `visiting` - The visiting player, if assigned
///
/// # Returns
///
/// The resolved pair `(local, visiting)` when both checks pass.
///
/// # Errors
///
/// Returns an error if:
/// - Either player is absent (`PlayersMissing`)
/// - Both identifiers refer to the same player (`PlayersDuplicated`)
pub const fn validate_players(
    local: Option<PlayerId>,
    visiting: Option<PlayerId>,
) -> Result<(PlayerId, PlayerId), DomainError> {
    match (local, visiting) {
        (Some(local), Some(visiting)) => {
            if local.value() == visiting.value() {
                Err(DomainError::PlayersDuplicated(local))
            } else {
                Ok((local, visiting))
            }
        }
        _ => Err(DomainError::PlayersMissing),
    }
}

/// Validates that a court is assigned.
///
/// # Errors
///
/// Returns `DomainError::CourtMissing` if no court is assigned.
pub const fn validate_court(court: Option<CourtId>) -> Result<CourtId, DomainError> {
    match court {
        Some(court) => Ok(court),
        None => Err(DomainError::CourtMissing),
    }
}

/// Validates that the start time is not strictly in the past.
///
/// A start time equal to `now` is accepted.
///
/// # Arguments
///
/// * `start_time` - The candidate start time
/// * `now` - The moment of validation
///
/// # Errors
///
/// Returns `DomainError::InvalidStartTime` if `start_time < now`.
pub fn validate_start_time(
    start_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), DomainError> {
    if start_time < now {
        return Err(DomainError::InvalidStartTime { start_time });
    }
    Ok(())
}

/// Validates that no existing match on the same court starts within the
/// minimum separation window of the candidate start time.
///
/// The comparison is symmetric: a candidate scheduled less than
/// [`MIN_SEPARATION_HOURS`] before an existing match conflicts just as one
/// scheduled less than that after it. The hour difference truncates toward
/// zero, so a gap of 3 hours 59 minutes counts as 3 hours and conflicts.
///
/// # Arguments
///
/// * `court` - The court the candidate match is assigned to
/// * `start_time` - The candidate start time
/// * `existing` - All existing matches to scan
///
/// # Errors
///
/// Returns `DomainError::ScheduleConflict` naming the blocking match's start
/// time if the window is violated.
pub fn validate_schedule(
    court: CourtId,
    start_time: DateTime<Utc>,
    existing: &[Match],
) -> Result<(), DomainError> {
    for other in existing {
        if other.court != court {
            continue;
        }
        let hours_apart: i64 = (other.start_time - start_time).num_hours().abs();
        if hours_apart < MIN_SEPARATION_HOURS {
            return Err(DomainError::ScheduleConflict {
                court,
                existing_start: other.start_time,
            });
        }
    }
    Ok(())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::score;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical identifier of a persisted match.
///
/// Assigned by the persistence layer on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId {
    /// The numeric identifier.
    value: i64,
}

impl MatchId {
    /// Creates a new `MatchId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// Canonical identifier of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId {
    /// The numeric identifier.
    value: i64,
}

impl PlayerId {
    /// Creates a new `PlayerId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// Canonical identifier of a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourtId {
    /// The numeric identifier.
    value: i64,
}

impl CourtId {
    /// Creates a new `CourtId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// Represents the lifecycle state of a match.
///
/// The lifecycle only advances forward; no transition ever regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Initial state after creation. Editing and deletion allowed.
    #[default]
    NotStarted,
    /// The match has been started. Points may be scored.
    InProgress,
    /// A side has won six games. Terminal state.
    Finished,
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(Self::NotStarted),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "FINISHED" => Ok(Self::Finished),
            _ => Err(format!("Unknown match status: {s}")),
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MatchStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Finished => "FINISHED",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `NotStarted` → `InProgress`
    /// - `InProgress` → `Finished`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::NotStarted, Self::InProgress) | (Self::InProgress, Self::Finished)
        )
    }

    /// Returns whether the match may still be edited or deleted.
    #[must_use]
    pub const fn allows_editing(&self) -> bool {
        matches!(self, Self::NotStarted)
    }
}

/// The side of the court a point is awarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// The local (home) player.
    Local,
    /// The visiting player.
    Visitor,
}

impl Side {
    /// Returns the opposing side.
    #[must_use]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Local => Self::Visitor,
            Self::Visitor => Self::Local,
        }
    }

    /// Converts this side to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Visitor => "VISITOR",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The central match entity: two players, a court, a schedule slot, and
/// cumulative game/point state.
///
/// Point counters stay in `0..=4`, where 4 represents Advantage. At most one
/// side may hold 4 at any time, and only while the other side holds 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Canonical identifier, assigned by the persistence layer on first save.
    /// `None` indicates the match has not been persisted yet.
    pub id: Option<MatchId>,
    /// The local (home) player.
    pub local_player: PlayerId,
    /// The visiting player. Always distinct from `local_player`.
    pub visiting_player: PlayerId,
    /// The assigned court.
    pub court: CourtId,
    /// The scheduled start time.
    pub start_time: DateTime<Utc>,
    /// The lifecycle status.
    pub status: MatchStatus,
    /// The local side's point counter within the current game.
    pub local_points: u8,
    /// The visiting side's point counter within the current game.
    pub visiting_points: u8,
    /// Games won by the local side. The match finishes at six.
    pub local_games_won: u8,
    /// Games won by the visiting side. The match finishes at six.
    pub visiting_games_won: u8,
    /// Display label derived from `local_points` ("0", "15", "30", "40", "Adv").
    pub local_point_label: String,
    /// Display label derived from `visiting_points`.
    pub visiting_point_label: String,
}

impl Match {
    /// Creates a new unpersisted `Match` in the `NotStarted` state with all
    /// point and game counters zeroed.
    ///
    /// # Arguments
    ///
    /// * `local_player` - The local player
    /// * `visiting_player` - The visiting player
    /// * `court` - The assigned court
    /// * `start_time` - The scheduled start time
    #[must_use]
    pub fn new(
        local_player: PlayerId,
        visiting_player: PlayerId,
        court: CourtId,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            local_player,
            visiting_player,
            court,
            start_time,
            status: MatchStatus::NotStarted,
            local_points: 0,
            visiting_points: 0,
            local_games_won: 0,
            visiting_games_won: 0,
            local_point_label: String::from(score::LOVE_LABEL),
            visiting_point_label: String::from(score::LOVE_LABEL),
        }
    }

    /// Creates a `Match` with an existing identifier.
    ///
    /// The match starts in the `NotStarted` state with counters zeroed, the
    /// same as [`Match::new`].
    #[must_use]
    pub fn with_id(
        id: MatchId,
        local_player: PlayerId,
        visiting_player: PlayerId,
        court: CourtId,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(local_player, visiting_player, court, start_time)
        }
    }

    /// Returns the point counter for the given side.
    #[must_use]
    pub const fn points(&self, side: Side) -> u8 {
        match side {
            Side::Local => self.local_points,
            Side::Visitor => self.visiting_points,
        }
    }

    /// Sets the point counter for the given side.
    ///
    /// Labels are not recomputed here; call [`Match::refresh_labels`] after
    /// the counters settle.
    pub const fn set_points(&mut self, side: Side, points: u8) {
        match side {
            Side::Local => self.local_points = points,
            Side::Visitor => self.visiting_points = points,
        }
    }

    /// Returns the games-won counter for the given side.
    #[must_use]
    pub const fn games_won(&self, side: Side) -> u8 {
        match side {
            Side::Local => self.local_games_won,
            Side::Visitor => self.visiting_games_won,
        }
    }

    /// Increments the games-won counter for the given side by one.
    pub const fn increment_games_won(&mut self, side: Side) {
        match side {
            Side::Local => self.local_games_won += 1,
            Side::Visitor => self.visiting_games_won += 1,
        }
    }

    /// Re-derives both display labels from the point counters.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPointValue` if either counter has left
    /// the range `0..=4`. The engine guarantees this never happens.
    pub fn refresh_labels(&mut self) -> Result<(), DomainError> {
        self.local_point_label = String::from(score::label(self.local_points)?);
        self.visiting_point_label = String::from(score::label(self.visiting_points)?);
        Ok(())
    }
}

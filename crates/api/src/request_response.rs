// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request DTOs for the match service.
//!
//! These are distinct from domain types and represent the service contract:
//! raw field types, with optional fields where the validator must be able to
//! report an absence.

use chrono::{DateTime, Utc};

/// Request to create a new match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMatchRequest {
    /// Optional client-supplied identifier. Must not already exist.
    pub id: Option<i64>,
    /// The local player identifier.
    pub local_player_id: Option<i64>,
    /// The visiting player identifier.
    pub visiting_player_id: Option<i64>,
    /// The court identifier.
    pub court_id: Option<i64>,
    /// The scheduled start time.
    pub start_time: DateTime<Utc>,
}

/// Request to edit a not-yet-started match.
///
/// Players and start time are re-validated; the court may be changed but is
/// not re-validated, and no scheduling-conflict check runs on edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMatchRequest {
    /// The identifier of the match to edit.
    pub id: i64,
    /// The local player identifier.
    pub local_player_id: Option<i64>,
    /// The visiting player identifier.
    pub visiting_player_id: Option<i64>,
    /// Replacement court, when present. Kept as-is otherwise.
    pub court_id: Option<i64>,
    /// The scheduled start time.
    pub start_time: DateTime<Utc>,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{DateTime, Duration, Utc};
use matchpoint_domain::{Match, MatchId};
use matchpoint_persistence::InMemoryMatchStore;

use crate::{CreateMatchRequest, MatchService};

pub fn create_test_service() -> MatchService<InMemoryMatchStore> {
    MatchService::new(InMemoryMatchStore::new())
}

/// A start time safely in the future relative to the validating clock.
pub fn future_start() -> DateTime<Utc> {
    Utc::now() + Duration::hours(24)
}

pub fn create_valid_request() -> CreateMatchRequest {
    CreateMatchRequest {
        id: None,
        local_player_id: Some(1),
        visiting_player_id: Some(2),
        court_id: Some(10),
        start_time: future_start(),
    }
}

/// Creates a match through the service and returns it with its assigned id.
pub fn create_stored_match(service: &MatchService<InMemoryMatchStore>) -> (MatchId, Match) {
    let stored: Match = service.create(create_valid_request()).unwrap();
    (stored.id.unwrap(), stored)
}

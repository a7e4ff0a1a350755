// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{TimeZone, Utc};
use matchpoint_domain::{CourtId, Match, MatchId, MatchStatus, PlayerId, Side};

pub fn create_scheduled_match() -> Match {
    Match::with_id(
        MatchId::new(1),
        PlayerId::new(10),
        PlayerId::new(20),
        CourtId::new(5),
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap(),
    )
}

pub fn create_in_progress_match() -> Match {
    let mut m: Match = create_scheduled_match();
    m.status = MatchStatus::InProgress;
    m
}

/// An in-progress match with the given point counters and refreshed labels.
pub fn create_match_at_points(local: u8, visiting: u8) -> Match {
    let mut m: Match = create_in_progress_match();
    m.set_points(Side::Local, local);
    m.set_points(Side::Visitor, visiting);
    m.refresh_labels().unwrap();
    m
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod score;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use score::{
    SCORE_ADVANTAGE, SCORE_FIFTEEN, SCORE_FORTY, SCORE_LOVE, SCORE_THIRTY, label,
};
pub use types::{CourtId, Match, MatchId, MatchStatus, PlayerId, Side};
pub use validation::{
    MIN_SEPARATION_HOURS, validate_court, validate_players, validate_schedule,
    validate_start_time,
};

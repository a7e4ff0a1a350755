// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Translation of internal point counters to tennis display labels.

use crate::error::DomainError;

/// Point counter value for love (no points).
pub const SCORE_LOVE: u8 = 0;
/// Point counter value for 15.
pub const SCORE_FIFTEEN: u8 = 1;
/// Point counter value for 30.
pub const SCORE_THIRTY: u8 = 2;
/// Point counter value for 40.
pub const SCORE_FORTY: u8 = 3;
/// Point counter value for Advantage.
pub const SCORE_ADVANTAGE: u8 = 4;

/// Display label for a zeroed point counter.
pub(crate) const LOVE_LABEL: &str = "0";

/// Point counter to display label, indexed by counter value.
const LABELS: [&str; 5] = [LOVE_LABEL, "15", "30", "40", "Adv"];

/// Translates an internal point counter to its display label.
///
/// Defined only for counters in `0..=4`. The rest of the engine guarantees
/// counters never leave that range, so an out-of-range input signals a
/// corrupted match state rather than a user error.
///
/// # Errors
///
/// Returns `DomainError::InvalidPointValue` for counters outside `0..=4`.
pub fn label(points: u8) -> Result<&'static str, DomainError> {
    LABELS
        .get(usize::from(points))
        .copied()
        .ok_or(DomainError::InvalidPointValue { points })
}

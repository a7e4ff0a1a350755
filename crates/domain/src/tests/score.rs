// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, SCORE_ADVANTAGE, SCORE_FIFTEEN, SCORE_FORTY, SCORE_LOVE, SCORE_THIRTY, label,
};

#[test]
fn test_label_translates_every_valid_counter() {
    assert_eq!(label(SCORE_LOVE).unwrap(), "0");
    assert_eq!(label(SCORE_FIFTEEN).unwrap(), "15");
    assert_eq!(label(SCORE_THIRTY).unwrap(), "30");
    assert_eq!(label(SCORE_FORTY).unwrap(), "40");
    assert_eq!(label(SCORE_ADVANTAGE).unwrap(), "Adv");
}

#[test]
fn test_label_is_pure() {
    let first: &str = label(SCORE_THIRTY).unwrap();
    let second: &str = label(SCORE_THIRTY).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_label_rejects_counter_above_advantage() {
    let result: Result<&str, DomainError> = label(5);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidPointValue { points: 5 }
    ));
}

#[test]
fn test_label_rejects_large_counter() {
    let result: Result<&str, DomainError> = label(u8::MAX);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidPointValue { points: u8::MAX }
    ));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The backing store is unreachable or its lock is poisoned.
    StorageUnavailable(String),
    /// An update or delete targeted an identifier the store does not hold.
    RecordNotFound(i64),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageUnavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            Self::RecordNotFound(id) => write!(f, "Record not found: {id}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the service layer.

use matchpoint::EngineError;
use matchpoint_domain::DomainError;
use matchpoint_persistence::PersistenceError;
use thiserror::Error;

/// Service-level errors: the flat taxonomy the transport layer maps to
/// response codes.
///
/// `NotFound` maps to a 404-equivalent; everything except `Persistence`
/// maps to a 400-equivalent. Persistence failures propagate unchanged and
/// are never retried by the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The requested match id does not exist.
    #[error("Match with id {id} does not exist")]
    NotFound {
        /// The missing identifier.
        id: i64,
    },
    /// Create was called with an id that already exists.
    #[error("Match with id {id} already exists")]
    AlreadyExists {
        /// The conflicting identifier.
        id: i64,
    },
    /// A validation rule rejected the match.
    #[error("Validation failed: {0}")]
    Validation(#[from] DomainError),
    /// A lifecycle or scoring rule rejected the operation.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The persistence port failed.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] PersistenceError),
}

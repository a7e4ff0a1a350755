// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use matchpoint_domain::{Match, MatchId};

/// The abstract persistence contract the match service depends on.
///
/// The engine is stateless between calls: all durable state lives in the
/// persisted [`Match`] record, fetched fresh at the start of each operation
/// and written back at the end. Implementations must provide at least
/// read-modify-write atomicity per record.
pub trait MatchRepository {
    /// Returns all persisted matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    fn find_all(&self) -> Result<Vec<Match>, PersistenceError>;

    /// Returns the match with the given identifier, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    fn find_by_id(&self, id: MatchId) -> Result<Option<Match>, PersistenceError>;

    /// Checks whether a match with the given identifier exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    fn exists_by_id(&self, id: MatchId) -> Result<bool, PersistenceError>;

    /// Persists a match: inserts and assigns an identifier when `id` is
    /// `None`, updates the existing record otherwise. Returns the stored
    /// representation, including any newly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable, or if an update
    /// targets an identifier the store does not hold.
    fn save(&self, m: Match) -> Result<Match, PersistenceError>;

    /// Removes the match with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable, or if no record
    /// with the identifier exists.
    fn delete_by_id(&self, id: MatchId) -> Result<(), PersistenceError>;
}

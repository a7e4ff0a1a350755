// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::repository::MatchRepository;
use matchpoint_domain::{Match, MatchId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Mutable store state guarded by the mutex.
#[derive(Debug, Default)]
struct Inner {
    /// Persisted matches keyed by identifier.
    matches: HashMap<i64, Match>,
    /// The next identifier to assign on insert.
    next_id: i64,
}

/// A thread-safe in-memory implementation of [`MatchRepository`].
///
/// Identifiers are assigned from a monotonically increasing counter starting
/// at 1. Used by tests and by callers that need no durable store.
#[derive(Debug)]
pub struct InMemoryMatchStore {
    inner: Mutex<Inner>,
}

impl InMemoryMatchStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                matches: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, PersistenceError> {
        self.inner
            .lock()
            .map_err(|err| PersistenceError::StorageUnavailable(err.to_string()))
    }
}

impl Default for InMemoryMatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRepository for InMemoryMatchStore {
    fn find_all(&self) -> Result<Vec<Match>, PersistenceError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        debug!("Listing {} stored matches", inner.matches.len());
        let mut all: Vec<Match> = inner.matches.values().cloned().collect();
        // HashMap iteration order is arbitrary; listings are id-ordered.
        all.sort_by_key(|m| m.id.map(|id| id.value()));
        Ok(all)
    }

    fn find_by_id(&self, id: MatchId) -> Result<Option<Match>, PersistenceError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        debug!("Looking up match {}", id.value());
        Ok(inner.matches.get(&id.value()).cloned())
    }

    fn exists_by_id(&self, id: MatchId) -> Result<bool, PersistenceError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        Ok(inner.matches.contains_key(&id.value()))
    }

    fn save(&self, m: Match) -> Result<Match, PersistenceError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        let (key, stored): (i64, Match) = match m.id {
            Some(id) => {
                if inner.matches.contains_key(&id.value()) {
                    debug!("Updating match {}", id.value());
                } else {
                    // Client-supplied id on first save: honor it and keep the
                    // counter ahead of it.
                    inner.next_id = inner.next_id.max(id.value() + 1);
                    debug!("Inserting match with supplied id {}", id.value());
                }
                (id.value(), m)
            }
            None => {
                let id: i64 = inner.next_id;
                inner.next_id += 1;
                debug!("Inserting match, assigned id {id}");
                let mut inserted: Match = m;
                inserted.id = Some(MatchId::new(id));
                (id, inserted)
            }
        };
        inner.matches.insert(key, stored.clone());
        Ok(stored)
    }

    fn delete_by_id(&self, id: MatchId) -> Result<(), PersistenceError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        debug!("Deleting match {}", id.value());
        if inner.matches.remove(&id.value()).is_none() {
            return Err(PersistenceError::RecordNotFound(id.value()));
        }
        Ok(())
    }
}

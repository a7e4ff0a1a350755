// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The match service: the public contract consumed by the transport layer.
//!
//! Each operation is synchronous and stateless between calls: the match is
//! fetched fresh from the persistence port, run through the engine, and
//! written back. Validation runs to completion before any mutation begins,
//! so no partial state survives a failed precondition.

use crate::error::ServiceError;
use crate::request_response::{CreateMatchRequest, UpdateMatchRequest};
use chrono::Utc;
use matchpoint::{add_point, require_not_started, start};
use matchpoint_domain::{
    CourtId, Match, MatchId, PlayerId, Side, validate_court, validate_players, validate_schedule,
    validate_start_time,
};
use matchpoint_persistence::MatchRepository;
use tracing::{info, warn};

/// Orchestrates the validator, state machine, and scoring engine around a
/// persistence port.
pub struct MatchService<R: MatchRepository> {
    repository: R,
}

impl<R: MatchRepository> MatchService<R> {
    /// Creates a new service over the given repository.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns all matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence port fails.
    pub fn list(&self) -> Result<Vec<Match>, ServiceError> {
        Ok(self.repository.find_all()?)
    }

    /// Returns the match with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if no such match exists.
    pub fn get_by_id(&self, id: MatchId) -> Result<Match, ServiceError> {
        self.repository
            .find_by_id(id)?
            .ok_or(ServiceError::NotFound { id: id.value() })
    }

    /// Creates a new match after running the full creation validation chain:
    /// id uniqueness, players, court, start time, and scheduling conflict.
    ///
    /// The match is persisted in the `NotStarted` state with all point and
    /// game counters zeroed, regardless of what the request carried.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A client-supplied id already exists (`AlreadyExists`)
    /// - Any validation rule rejects the request (`Validation`)
    /// - The persistence port fails
    pub fn create(&self, request: CreateMatchRequest) -> Result<Match, ServiceError> {
        if let Some(id) = request.id
            && self.repository.exists_by_id(MatchId::new(id))?
        {
            warn!("Rejecting create: match {id} already exists");
            return Err(ServiceError::AlreadyExists { id });
        }

        let (local, visiting): (PlayerId, PlayerId) = validate_players(
            request.local_player_id.map(PlayerId::new),
            request.visiting_player_id.map(PlayerId::new),
        )?;
        let court: CourtId = validate_court(request.court_id.map(CourtId::new))?;
        validate_start_time(request.start_time, Utc::now())?;
        validate_schedule(court, request.start_time, &self.repository.find_all()?)?;

        let candidate: Match = match request.id {
            Some(id) => Match::with_id(MatchId::new(id), local, visiting, court, request.start_time),
            None => Match::new(local, visiting, court, request.start_time),
        };

        let stored: Match = self.repository.save(candidate)?;
        info!(
            "Created match {:?} on court {} starting at {}",
            stored.id.map(|id| id.value()),
            court.value(),
            stored.start_time
        );
        Ok(stored)
    }

    /// Edits a not-yet-started match: players and start time are
    /// re-validated; court and scheduling conflict are not.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The match does not exist (`NotFound`)
    /// - The match has already been started or finished (`Engine`)
    /// - The players or start time are invalid (`Validation`)
    /// - The persistence port fails
    pub fn edit(&self, request: UpdateMatchRequest) -> Result<Match, ServiceError> {
        let existing: Match = self.get_by_id(MatchId::new(request.id))?;
        require_not_started(&existing)?;

        let (local, visiting): (PlayerId, PlayerId) = validate_players(
            request.local_player_id.map(PlayerId::new),
            request.visiting_player_id.map(PlayerId::new),
        )?;
        validate_start_time(request.start_time, Utc::now())?;

        let mut edited: Match = existing;
        edited.local_player = local;
        edited.visiting_player = visiting;
        edited.start_time = request.start_time;
        if let Some(court_id) = request.court_id {
            edited.court = CourtId::new(court_id);
        }

        let stored: Match = self.repository.save(edited)?;
        info!("Edited match {}", request.id);
        Ok(stored)
    }

    /// Deletes a not-yet-started match.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The match does not exist (`NotFound`)
    /// - The match has already been started or finished (`Engine`)
    /// - The persistence port fails
    pub fn delete(&self, id: MatchId) -> Result<(), ServiceError> {
        let existing: Match = self.get_by_id(id)?;
        require_not_started(&existing)?;

        self.repository.delete_by_id(id)?;
        info!("Deleted match {}", id.value());
        Ok(())
    }

    /// Starts a match, transitioning it to `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The match does not exist (`NotFound`)
    /// - The match has already been started or finished (`Engine`)
    /// - The persistence port fails
    pub fn start(&self, id: MatchId) -> Result<Match, ServiceError> {
        let existing: Match = self.get_by_id(id)?;
        let started: Match = start(&existing)?;

        let stored: Match = self.repository.save(started)?;
        info!("Started match {}", id.value());
        Ok(stored)
    }

    /// Scores one point for `side` on an in-progress match, persisting the
    /// resulting state (including any game or match completion).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The match does not exist (`NotFound`)
    /// - The match is not in progress, or its counters are corrupted
    ///   (`Engine`)
    /// - The persistence port fails
    pub fn add_point(&self, id: MatchId, side: Side) -> Result<Match, ServiceError> {
        let existing: Match = self.get_by_id(id)?;
        let scored: Match = add_point(&existing, side)?;

        let stored: Match = self.repository.save(scored)?;
        info!(
            "Point for {side} on match {}: {} - {} ({} - {} games)",
            id.value(),
            stored.local_point_label,
            stored.visiting_point_label,
            stored.local_games_won,
            stored.visiting_games_won
        );
        Ok(stored)
    }
}

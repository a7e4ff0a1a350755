// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence port for the Matchpoint tennis backend.
//!
//! This crate defines the abstract repository contract the match service
//! depends on, plus a thread-safe in-memory implementation. The mutex around
//! the store provides the per-record read-modify-write atomicity the engine
//! assumes; a durable backend supplying the same trait is free to use
//! row-level locking or optimistic version checks instead.

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
mod memory;
mod repository;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use memory::InMemoryMatchStore;
pub use repository::MatchRepository;

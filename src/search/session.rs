// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search session: the query box and the list under it.
//!
//! A session owns exactly two things, the current query and the results for
//! it, and replaces the results wholesale whenever the query changes.
//!
//! ```text
//!            set_query("")                 set_query("mouse")
//!   ┌──────┐ ◀─────────────── ┌──────────┐ ◀──────────────── ┌──────┐
//!   │ Idle │                  │ Searching│                   │ Idle │
//!   └──────┘ ────────────────▶└──────────┘ ────────────────▶ └──────┘
//!            begin("mouse")                complete(ticket)
//! ```
//!
//! The local backend answers synchronously, so `set_query` passes through
//! `Searching` and back before it returns. The `begin`/`complete` pair is the
//! same contract split in two for a backend that answers later: every
//! `begin` issues a ticket, and `complete` only accepts the ticket of the most
//! recent `begin`. Slow answers to superseded queries are dropped on arrival
//! (last write wins).

use std::sync::Arc;

use crate::scoring::DEFAULT_MAX_RESULTS;
use crate::search::merge::Searcher;
use crate::types::MatchResult;

/// Anything that can answer "top N hits for this query".
pub trait SearchBackend {
    fn search(&self, query: &str, max_results: usize) -> Vec<MatchResult>;

    /// Cap a new session starts with.
    fn max_results(&self) -> usize {
        DEFAULT_MAX_RESULTS
    }
}

impl SearchBackend for Searcher {
    fn search(&self, query: &str, max_results: usize) -> Vec<MatchResult> {
        Searcher::search(self, query, max_results)
    }

    fn max_results(&self) -> usize {
        self.config().max_results
    }
}

impl<T: SearchBackend + ?Sized> SearchBackend for Arc<T> {
    fn search(&self, query: &str, max_results: usize) -> Vec<MatchResult> {
        (**self).search(query, max_results)
    }

    fn max_results(&self) -> usize {
        (**self).max_results()
    }
}

impl<T: SearchBackend + ?Sized> SearchBackend for &T {
    fn search(&self, query: &str, max_results: usize) -> Vec<MatchResult> {
        (**self).search(query, max_results)
    }

    fn max_results(&self) -> usize {
        (**self).max_results()
    }
}

/// Where the session is in its query/result cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No computation outstanding. Results (possibly empty) are current.
    #[default]
    Idle,
    /// A query was issued and its results have not been applied yet.
    Searching,
}

/// Proof that a query was issued, redeemed by [`SearchSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    query: String,
}

impl QueryTicket {
    /// The query this ticket was issued for.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Query state and results for one UI context.
#[derive(Debug)]
pub struct SearchSession<B> {
    backend: B,
    max_results: usize,
    query: String,
    results: Vec<MatchResult>,
    state: SessionState,
    generation: u64,
}

impl<B: SearchBackend> SearchSession<B> {
    /// Idle session capped at the backend's configured `max_results`.
    pub fn new(backend: B) -> Self {
        Self {
            max_results: backend.max_results(),
            backend,
            query: String::new(),
            results: Vec::new(),
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Change the query and recompute results before returning.
    pub fn set_query(&mut self, query: impl Into<String>) -> &[MatchResult] {
        if let Some(ticket) = self.begin(query) {
            let results = self.backend.search(ticket.query(), self.max_results);
            self.complete(&ticket, results);
        }
        &self.results
    }

    /// Record a new query and invalidate any outstanding ticket.
    ///
    /// A blank query resets the session to `Idle` with no results and returns
    /// `None`: there is nothing to compute.
    pub fn begin(&mut self, query: impl Into<String>) -> Option<QueryTicket> {
        self.query = query.into();
        self.generation += 1;

        if self.query.trim().is_empty() {
            self.results.clear();
            self.state = SessionState::Idle;
            return None;
        }

        self.state = SessionState::Searching;
        Some(QueryTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Apply results for `ticket` if it is still the latest one.
    ///
    /// Returns whether the results were applied.
    pub fn complete(&mut self, ticket: &QueryTicket, results: Vec<MatchResult>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.query(),
                current = self.query.as_str(),
                "discarding superseded search results"
            );
            return false;
        }

        self.results = results;
        self.state = SessionState::Idle;
        true
    }

    /// Same as `set_query("")`.
    pub fn clear(&mut self) {
        self.set_query(String::new());
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_searching(&self) -> bool {
        self.state == SessionState::Searching
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

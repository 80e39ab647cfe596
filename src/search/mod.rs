// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Everything culminates here. The corpora are indexed, the fields are
//! weighted, the matcher knows how forgiving to be. Now you actually find
//! things: fan the query out over every corpus, fold the hits into one
//! ranked list, and hand that list to whoever is holding the query box.

pub mod dedup;
pub mod merge;
pub mod session;

pub use dedup::{RecordKey, ResultMerger};
pub use merge::Searcher;
pub use session::{QueryTicket, SearchBackend, SearchSession, SessionState};

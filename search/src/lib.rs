//! Hearth quick-open fuzzy matching.
//!
//! Decides whether a query's characters appear in order inside a candidate
//! string, with a bounded number of gaps and a set of delimiter characters
//! that are free to skip over. Matching is pure and synchronous; nothing
//! here touches shared state, so calls can run concurrently without
//! coordination.
//!
//! # Strategies
//!
//! A query is accepted when either placement strategy succeeds, tried in
//! this order:
//! - leftmost: each query character takes its first occurrence in what
//!   remains of the candidate,
//! - longest run: the longest query prefix occurring verbatim is consumed
//!   whole, retrying progressively shorter prefixes when the remainder
//!   cannot be placed.
//!
//! The second strategy rescues queries where a large block of the query
//! appears together later in the candidate than its first characters do,
//! e.g. `tu` against `light.turn_on` with a zero skip budget and `.` as an
//! immune delimiter.

mod config;
mod filter;
mod matcher;

pub use config::MatchConfig;
pub use filter::filter_candidates;
pub use matcher::{matches, matches_with};

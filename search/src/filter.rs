//! Candidate filtering for quick-open lists.

use crate::config::MatchConfig;
use crate::matcher::matches_with;

/// Retains the candidates the filter matches, preserving input order.
///
/// No ranking is applied; callers that want scored ordering do that on
/// their own.
pub fn filter_candidates<'a, I>(filter: &str, candidates: I, config: &MatchConfig) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter(|word| matches_with(filter, word, config))
        .collect()
}

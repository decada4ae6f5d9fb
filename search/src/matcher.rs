//! Subsequence matching with a bounded skip budget.

use crate::config::MatchConfig;

/// Returns true when every character of `filter`, in order, occurs in
/// `word`, with the default configuration (unbounded skips).
pub fn matches(filter: &str, word: &str) -> bool {
    matches_with(filter, word, &MatchConfig::default())
}

/// Returns true when every character of `filter`, in order, occurs in
/// `word` without spending more gaps than the configured budget.
///
/// An empty filter matches anything. Comparison is case-sensitive with no
/// folding.
pub fn matches_with(filter: &str, word: &str, config: &MatchConfig) -> bool {
    if filter.is_empty() {
        return true;
    }

    leftmost(filter, word, config.max_skips, &config.immune_delimiters)
        || longest_run(filter, word, config.max_skips, &config.immune_delimiters)
}

/// Places each filter character at its first occurrence, left to right.
fn leftmost(filter: &str, word: &str, mut budget: Option<u32>, immune: &[char]) -> bool {
    let mut rest = word;

    for ch in filter.chars() {
        let Some(pos) = rest.find(ch) else {
            return false;
        };
        if !spend_gap(rest, pos, &mut budget, immune) {
            return false;
        }
        rest = &rest[pos + ch.len_utf8()..];
    }
    true
}

/// Consumes the longest filter prefix occurring verbatim in the word,
/// falling back to shorter prefixes when the remainder cannot be placed.
fn longest_run(filter: &str, word: &str, budget: Option<u32>, immune: &[char]) -> bool {
    if filter.is_empty() {
        return true;
    }

    for end in filter.char_indices().map(|(i, c)| i + c.len_utf8()).rev() {
        let prefix = &filter[..end];
        let Some(pos) = word.find(prefix) else {
            continue;
        };

        let mut budget = budget;
        if !spend_gap(word, pos, &mut budget, immune) {
            continue;
        }
        if longest_run(&filter[end..], &word[pos + prefix.len()..], budget, immune) {
            return true;
        }
    }
    false
}

/// Accounts for the characters jumped over before a match at `pos`.
///
/// A match at the start of the remaining word skipped nothing, and a match
/// landing right after an immune delimiter is free. Any other jump costs
/// one unit regardless of its length; `None` means unbounded.
fn spend_gap(rest: &str, pos: usize, budget: &mut Option<u32>, immune: &[char]) -> bool {
    if pos == 0 {
        return true;
    }

    let preceding = rest[..pos].chars().next_back();
    if preceding.is_some_and(|c| immune.contains(&c)) {
        return true;
    }

    match budget {
        None => true,
        Some(0) => false,
        Some(remaining) => {
            *remaining -= 1;
            true
        }
    }
}

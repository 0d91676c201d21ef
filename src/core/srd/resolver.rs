//! Match Resolution
//!
//! Decides what a lookup replies with once the search backend has produced
//! its candidates: nothing, a disambiguation list, or a single entry.

use super::entry::Named;

/// Outcome of resolving a query against a candidate set.
#[derive(Debug, PartialEq, Eq)]
pub enum MatchOutcome<'a, T> {
    NoMatch,
    /// Several candidates and none named exactly like the query, in search order.
    Ambiguous(&'a [T]),
    Resolved(&'a T),
}

impl<'a, T> MatchOutcome<'a, T> {
    pub fn resolved(&self) -> Option<&'a T> {
        match self {
            Self::Resolved(entry) => Some(*entry),
            _ => None,
        }
    }
}

/// Resolve `query` against the candidates returned by a search.
///
/// An exact case-insensitive name match wins even when other candidates
/// contain it ("mass heal" vs. "mass healing word"); the first such match is
/// taken when names repeat. A single candidate is always accepted.
pub fn resolve<'a, T: Named>(query: &str, candidates: &'a [T]) -> MatchOutcome<'a, T> {
    let needle = query.trim().to_lowercase();

    if let Some(exact) = candidates
        .iter()
        .find(|c| c.name().to_lowercase() == needle)
    {
        return MatchOutcome::Resolved(exact);
    }

    match candidates {
        [] => MatchOutcome::NoMatch,
        [only] => MatchOutcome::Resolved(only),
        _ => MatchOutcome::Ambiguous(candidates),
    }
}

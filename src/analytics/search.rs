//! Player name suggestions and name resolution over the league roster.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::nba::types::RosterEntry;


/// Upper bound on suggestions returned for one query.
pub const MAX_SUGGESTIONS: usize = 10;

/// Rank roster names containing `query` (case-insensitive).
///
/// Active players come first, alphabetically; retired players follow in
/// roster order. Names are deduplicated, and a name that is both active and
/// retired counts as active. The cap applies to the combined list.
///
/// The query is only lowercased; surrounding whitespace takes part in the match.
pub fn rank(query: &str, roster: &[RosterEntry]) -> Vec<String> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let (mut active, retired): (Vec<&RosterEntry>, Vec<&RosterEntry>) = roster
        .iter()
        .filter(|entry| entry.full_name.to_lowercase().contains(&needle))
        .partition(|entry| entry.is_active);

    active.sort_by(|a, b| compare_names(&a.full_name, &b.full_name));
    active.dedup_by(|a, b| a.full_name == b.full_name);

    let mut seen: HashSet<&str> = active.iter().map(|e| e.full_name.as_str()).collect();
    let retired = retired
        .into_iter()
        .filter(|entry| seen.insert(entry.full_name.as_str()));

    active
        .into_iter()
        .chain(retired)
        .take(MAX_SUGGESTIONS)
        .map(|entry| entry.full_name.clone())
        .collect()
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Resolve a full name to a roster entry.
///
/// An exact case-insensitive match wins; otherwise the first entry whose
/// name contains `name`. Blank input resolves to nothing.
pub fn find_player<'a>(name: &str, roster: &'a [RosterEntry]) -> Option<&'a RosterEntry> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    roster
        .iter()
        .find(|entry| entry.full_name.to_lowercase() == needle)
        .or_else(|| {
            roster
                .iter()
                .find(|entry| entry.full_name.to_lowercase().contains(&needle))
        })
}

//! Fuzzy registry-name matching.
//!
//! When an exact lookup misses, the engine falls back to a Levenshtein
//! nearest-neighbor search over all registered names. "calculater" is one
//! edit away from "calculator" and should launch it without making the
//! user repeat themselves.

use strsim::levenshtein;

use crate::domain::MatchResult;

/// A candidate is only accepted when its edit distance is strictly below
/// this bound. Anything at 4 or more edits is too different to trust.
const MAX_DISTANCE: usize = 4;

/// Find the registry name closest to `input`.
///
/// Distances are computed over case-folded strings. The smallest distance
/// wins; ties keep the first candidate seen, so callers that want a
/// deterministic result should pass `names` in a deterministic order
/// (the registry hands out sorted snapshots).
pub fn best_match(input: &str, names: &[String]) -> MatchResult {
    let input = input.to_lowercase();
    let mut best: Option<String> = None;
    let mut best_distance = usize::MAX;

    for name in names {
        let distance = levenshtein(&input, &name.to_lowercase());
        if distance < MAX_DISTANCE && distance < best_distance {
            best_distance = distance;
            best = Some(name.clone());
        }
    }

    MatchResult {
        candidate: best,
        distance: best_distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_close_name_accepted() {
        let registry = names(&["calculator", "notepad"]);
        let result = best_match("calculater", &registry);
        assert_eq!(result.candidate.as_deref(), Some("calculator"));
        assert_eq!(result.distance, 1);
    }

    #[test]
    fn test_distant_input_rejected() {
        let registry = names(&["calculator", "notepad"]);
        let result = best_match("xyzxyz", &registry);
        assert_eq!(result.candidate, None);
    }

    #[test]
    fn test_case_folded_comparison() {
        let registry = names(&["notepad"]);
        let result = best_match("NotePad", &registry);
        assert_eq!(result.candidate.as_deref(), Some("notepad"));
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn test_distance_is_a_metric() {
        let pairs = [("kitten", "sitting"), ("chrome", "crome"), ("a", "abc")];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
            assert_eq!(levenshtein(a, a), 0);
        }
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        // both at distance 1 from "notepat"
        let registry = names(&["notepad", "notepat1"]);
        let result = best_match("notepat", &registry);
        assert_eq!(result.candidate.as_deref(), Some("notepad"));
    }
}

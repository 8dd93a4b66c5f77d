//! Alignment resolution: turning per-character candidate sets into one
//! concrete, contiguity-maximizing index assignment.
//!
//! This is a greedy local search, not an exhaustive optimum search. Resolved
//! runs are grown outward by propagation; remaining gaps are settled one at a
//! time by trying each candidate and keeping the first one that leaves the
//! fewest entries unresolved. The tie-break order (first-encountered minimum,
//! lowest unresolved index next) is part of the observable behavior: score
//! comparisons downstream depend on which alignment wins among ties.

use crate::fuzzy::candidates::CandidateSets;

fn unresolved(alignment: &[Option<usize>]) -> usize {
    alignment.iter().filter(|entry| entry.is_none()).count()
}

fn in_set(set: &[usize], value: usize) -> bool {
    set.binary_search(&value).is_ok()
}

/// Extends resolved runs outward until a full left-to-right pass makes no
/// progress.
///
/// An unresolved entry whose predecessor resolved to `v` takes `v + 1` when
/// that position is among its candidates; one whose successor resolved to `w`
/// takes `w - 1`. The successor rule is applied second and wins when both
/// fire. Entries resolved earlier in the same pass feed later entries, so a
/// single pass can cascade down a whole run.
fn propagate(candidates: &CandidateSets, alignment: &mut [Option<usize>]) {
    let len = alignment.len();
    let mut before = len;
    let mut left = unresolved(alignment);

    while left > 0 && left < before {
        let first_gap = alignment.iter().position(|entry| entry.is_none()).unwrap_or(len);

        for i in first_gap..len {
            if alignment[i].is_some() {
                continue;
            }

            if i > 0
                && let Some(v) = alignment[i - 1]
                && in_set(&candidates[i], v + 1)
            {
                alignment[i] = Some(v + 1);
            }

            if i + 1 < len
                && let Some(w) = alignment[i + 1]
                && w > 0
                && in_set(&candidates[i], w - 1)
            {
                alignment[i] = Some(w - 1);
            }
        }

        before = left;
        left = unresolved(alignment);
    }
}

/// Resolves `candidates` into a single concrete alignment.
///
/// Every candidate set must be non-empty; the caller guarantees this by
/// bailing out of the match beforehand. Termination is guaranteed because
/// each outer iteration resolves at least one entry.
pub(crate) fn resolve(candidates: &CandidateSets) -> Vec<usize> {
    let len = candidates.len();
    let mut alignment: Vec<Option<usize>> = vec![None; len];

    // Interior positions with a single candidate are forced. The first and
    // last pattern index are never pre-filled here.
    for i in 1..len.saturating_sub(1) {
        if candidates[i].len() == 1 {
            alignment[i] = Some(candidates[i][0]);
        }
    }

    propagate(candidates, &mut alignment);

    while let Some(gap) = alignment.iter().position(|entry| entry.is_none()) {
        // An interior gap bounded by resolved entries on both sides sits
        // inside an already-delimited span; its exact value cannot change
        // the fragment count, so the first candidate will do.
        for i in 1..len.saturating_sub(1) {
            if alignment[i - 1].is_some() && alignment[i].is_none() && alignment[i + 1].is_some() {
                alignment[i] = Some(candidates[i][0]);
            }
        }

        // Try each candidate for the gap; keep the first one whose
        // propagation strictly beats the current state.
        let mut fewest = unresolved(&alignment);
        let mut best: Option<Vec<Option<usize>>> = None;

        for &position in &candidates[gap] {
            let mut trial = alignment.clone();
            trial[gap] = Some(position);
            propagate(candidates, &mut trial);

            let left = unresolved(&trial);
            if left < fewest {
                fewest = left;
                best = Some(trial);
            }
        }

        if let Some(winner) = best {
            alignment = winner;
        }
    }

    trace!("alignment resolved: {alignment:?}");
    alignment.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::candidates::candidate_sets;

    fn resolve_for(pattern: &str, text: &str) -> Vec<usize> {
        let pattern: Vec<char> = pattern.chars().collect();
        let text: Vec<char> = text.chars().collect();
        resolve(&candidate_sets(&pattern, &text).unwrap())
    }

    #[test]
    fn forced_alignment() {
        assert_eq!(resolve_for("God", "The Godfather"), vec![4, 5, 6]);
    }

    #[test]
    fn prefers_earliest_among_ties() {
        // Both halves of "ThTh" give a fully contiguous match; the
        // first-encountered minimum must win.
        assert_eq!(resolve_for("Th", "ThTh"), vec![0, 1]);
    }

    #[test]
    fn groups_into_longest_runs() {
        // "hin" should be taken from the third word, not spread over
        // "hi" and "ng".
        assert_eq!(resolve_for("Thing", "T hi hin ng g"), vec![0, 5, 6, 7, 10]);
    }

    #[test]
    fn backward_propagation_joins_runs() {
        // Choosing 'i' at index 8 lets "ing" close up; choosing index 6
        // would leave 'g' stranded.
        assert_eq!(resolve_for("Thing", "The Shining"), vec![0, 1, 8, 9, 10]);
    }

    #[test]
    fn strictly_increasing() {
        for (pattern, text) in [
            ("ANime", "A Nightmare on Elm Street"),
            ("Thing", "Thing Th i n g"),
            ("aaa", "aaaaaa"),
            ("abab", "abababab"),
        ] {
            let alignment = resolve_for(pattern, text);
            assert!(
                alignment.windows(2).all(|w| w[0] < w[1]),
                "{pattern:?} / {text:?}: {alignment:?}"
            );
        }
    }
}

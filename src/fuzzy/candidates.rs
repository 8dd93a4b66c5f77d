//! Candidate-position discovery for the fuzzy matcher.
//!
//! For every pattern index this computes the ascending list of text positions
//! at which that pattern character could participate in a complete
//! subsequence match. Feasibility is settled up front with a right-to-left
//! sweep: `latest[s]` is the latest text index at which `pattern[s..]` can
//! still start and run to completion, so a position `i` is viable for index
//! `s` exactly when `text[i] == pattern[s]` and `i <= latest[s]`.

/// Per-pattern-index candidate positions, ascending and deduplicated.
pub(crate) type CandidateSets = Vec<Vec<usize>>;

/// Latest feasible start position for each pattern suffix, or `None` when the
/// pattern is not a subsequence of the text at all.
fn latest_starts(pattern: &[char], text: &[char]) -> Option<Vec<usize>> {
    let mut latest = vec![0usize; pattern.len()];
    let mut bound = text.len();

    for (s, &pch) in pattern.iter().enumerate().rev() {
        let pos = text[..bound].iter().rposition(|&tch| tch == pch)?;
        latest[s] = pos;
        bound = pos;
    }

    Some(latest)
}

/// Computes the candidate sets for `pattern` against `text`.
///
/// Returns `None` as soon as any pattern index ends up with an empty set,
/// which makes a full match impossible. For index 0 every feasible start is
/// collected; for later indices the search begins strictly after the earliest
/// feasible position of the previous index.
pub(crate) fn candidate_sets(pattern: &[char], text: &[char]) -> Option<CandidateSets> {
    debug_assert!(!pattern.is_empty());

    let latest = latest_starts(pattern, text)?;
    let mut sets: CandidateSets = Vec::with_capacity(pattern.len());

    for (s, &pch) in pattern.iter().enumerate() {
        // Start strictly after the earliest feasible position of the
        // previous pattern character.
        let lower = match s {
            0 => 0,
            _ => sets[s - 1][0] + 1,
        };

        let found: Vec<usize> = (lower..=latest[s]).filter(|&i| text[i] == pch).collect();

        if found.is_empty() {
            trace!("candidate set {s} empty, no match possible");
            return None;
        }

        sets.push(found);
    }

    Some(sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sets(pattern: &str, text: &str) -> Option<CandidateSets> {
        candidate_sets(&chars(pattern), &chars(text))
    }

    #[test]
    fn single_occurrence() {
        let sets = sets("God", "The Godfather").unwrap();
        assert_eq!(sets, vec![vec![4], vec![5], vec![6]]);
    }

    #[test]
    fn repeated_occurrences() {
        let sets = sets("Th", "ThTh").unwrap();
        assert_eq!(sets, vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn infeasible_positions_pruned() {
        // The trailing 'a' cannot start a match: nothing follows it.
        let sets = sets("ab", "aba").unwrap();
        assert_eq!(sets[0], vec![0]);
        assert_eq!(sets[1], vec![1]);
    }

    #[test]
    fn missing_character() {
        assert!(sets("Q", "The Living Daylights").is_none());
    }

    #[test]
    fn text_too_short() {
        assert!(sets("abc", "ab").is_none());
        assert!(sets("a", "").is_none());
    }

    #[test]
    fn ascending_and_feasible() {
        let pattern = chars("Thing");
        let text = chars("T hi hin ng g");
        let sets = candidate_sets(&pattern, &text).unwrap();
        for (s, set) in sets.iter().enumerate() {
            assert!(set.windows(2).all(|w| w[0] < w[1]), "set {s} not ascending");
            for &i in set {
                assert_eq!(text[i], pattern[s]);
            }
        }
    }
}

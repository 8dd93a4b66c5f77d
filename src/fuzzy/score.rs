//! Mapping match statistics onto a single quality score in `[0, 1]`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::OnceLock;

use thread_local::ThreadLocal;

/// Weight of pattern density within the span (`c / a`).
const DENSITY_WEIGHT: f64 = 0.7;
/// Weight of span locality relative to the whole text (`a / n`).
const LOCALITY_WEIGHT: f64 = 0.3;

type ScoreKey = (usize, usize, usize, usize);

/// The mapping is pure over small integer quadruples, so results are memoized
/// per thread. Same scratch-cache pattern as a matcher's per-thread buffers:
/// no locking, safe under concurrent callers.
static CACHE: OnceLock<ThreadLocal<RefCell<HashMap<ScoreKey, f64>>>> = OnceLock::new();

fn compute(span_len: usize, fragments: usize, pattern_len: usize, text_len: usize) -> f64 {
    let (a, b, c, n) = (
        span_len as f64,
        fragments as f64,
        pattern_len as f64,
        text_len as f64,
    );

    let mix = DENSITY_WEIGHT * (c / a) + LOCALITY_WEIGHT * (a / n);

    if fragments == 1 {
        // Full contiguity earns a fixed bonus instead of the general
        // fragment-count term; the two branches differ by design.
        (c - 1.0) / c + mix / c
    } else {
        1.0 - b / c + mix / c
    }
}

/// Maps `(span length, fragment count, pattern length, text length)` to a
/// quality score.
///
/// A zero-length span (no match) scores 0. Otherwise the score blends pattern
/// density within the span with span locality in the text, discounted by the
/// number of fragments the match splintered into.
pub(crate) fn map_score(
    span_len: usize,
    fragments: usize,
    pattern_len: usize,
    text_len: usize,
) -> f64 {
    if span_len == 0 {
        return 0.0;
    }

    let cache = CACHE
        .get_or_init(ThreadLocal::new)
        .get_or(|| RefCell::new(HashMap::new()));
    *cache
        .borrow_mut()
        .entry((span_len, fragments, pattern_len, text_len))
        .or_insert_with(|| compute(span_len, fragments, pattern_len, text_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_scores_zero() {
        assert_eq!(map_score(0, 0, 1, 20), 0.0);
    }

    #[test]
    fn exact_whole_text_match() {
        // a == c == n, b == 1: mix is exactly 1.0, score is exactly 1.0.
        assert_eq!(map_score(5, 1, 5, 5), 1.0);
    }

    #[test]
    fn contiguous_branch_formula() {
        // "God" in "The Godfather": a=3, b=1, c=3, n=13.
        let mix = 0.7 + 0.3 * (3.0 / 13.0);
        let expected = 2.0 / 3.0 + mix / 3.0;
        assert!((map_score(3, 1, 3, 13) - expected).abs() < 1e-12);
    }

    #[test]
    fn fragmented_branch_formula() {
        // "Thing" in "The Shining": a=11, b=2, c=5, n=11.
        let mix = 0.7 * (5.0 / 11.0) + 0.3;
        let expected = 1.0 - 2.0 / 5.0 + mix / 5.0;
        assert!((map_score(11, 2, 5, 11) - expected).abs() < 1e-12);
    }

    #[test]
    fn fewer_fragments_score_higher() {
        assert!(map_score(5, 1, 5, 20) > map_score(5, 2, 5, 20));
        assert!(map_score(5, 2, 5, 20) > map_score(5, 3, 5, 20));
    }

    #[test]
    fn bounded() {
        for a in 1..=12usize {
            for b in 1..=6 {
                for c in b..=a {
                    for n in a..=14 {
                        let s = map_score(a, b, c, n);
                        assert!((0.0..=1.0).contains(&s), "score({a},{b},{c},{n}) = {s}");
                    }
                }
            }
        }
    }

    #[test]
    fn memoized_result_is_stable() {
        let first = map_score(7, 2, 4, 9);
        for _ in 0..10 {
            assert_eq!(map_score(7, 2, 4, 9), first);
        }
    }
}

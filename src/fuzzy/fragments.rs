//! Reconstruction of fragments and span from a resolved alignment.

use crate::fuzzy::FuzzyMatch;

fn capture(text: &[char], first: usize, last: usize) -> String {
    text[first..=last].iter().collect()
}

/// Converts a fully resolved, strictly increasing alignment into a
/// [`FuzzyMatch`]: consecutive indices merge into one fragment, a gap wider
/// than one character closes the current run, and the span covers everything
/// from the first to the last matched index inclusive.
pub(crate) fn compress(text: &[char], alignment: &[usize]) -> FuzzyMatch {
    debug_assert!(!alignment.is_empty());
    debug_assert!(alignment.windows(2).all(|w| w[0] < w[1]));

    let mut fragments = Vec::new();
    let mut run_start = alignment[0];
    let mut last = alignment[0];

    for &index in alignment {
        if index - last > 1 {
            fragments.push(capture(text, run_start, last));
            run_start = index;
        }
        last = index;
    }
    fragments.push(capture(text, run_start, last));

    let start = alignment[0];
    FuzzyMatch {
        span: capture(text, start, last),
        fragments,
        start,
    }
}

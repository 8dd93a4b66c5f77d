//! Contiguity-aware fuzzy subsequence matching.
//!
//! [`fuzzy_match`] decides whether a pattern can be read off a text in order
//! (not necessarily contiguously) and, among the possible occurrences, picks
//! the one that groups matched characters into the fewest, longest runs. The
//! pipeline is pure and single-threaded: candidate discovery, alignment
//! resolution, fragment reconstruction, then an optional score mapping via
//! [`fuzzy_score`].
//!
//! All positions are character indices, and matching is case sensitive;
//! callers wanting case folding fold before calling.
//!
//! # Examples
//!
//! ```
//! use textmatch::fuzzy::fuzzy_match;
//!
//! let m = fuzzy_match("Thing", "The Shining").unwrap();
//! assert_eq!(m.fragments, ["Th", "ing"]);
//! assert_eq!(m.span, "The Shining");
//!
//! assert!(fuzzy_match("Q", "The Living Daylights").is_none());
//! ```

mod align;
mod candidates;
mod fragments;
mod score;

use crate::MeasureError;
use crate::measures::Ratio;

/// A successful fuzzy match.
///
/// The no-match case is the `None` branch of [`fuzzy_match`], never a value
/// of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzyMatch {
    /// Maximal contiguous runs of matched text, in order. Concatenated they
    /// spell the pattern.
    pub fragments: Vec<String>,
    /// The text from the first to the last matched character, inclusive.
    pub span: String,
    /// Character index of the first matched character.
    pub start: usize,
}

/// Matches `pattern` against `text` as an ordered, not necessarily
/// contiguous, subsequence.
///
/// Among all occurrences the matcher prefers the one with the fewest
/// fragments (a greedy heuristic, deterministic for fixed inputs). Returns
/// `None` when the pattern cannot be read off the text. The empty pattern
/// trivially matches at the start with no fragments.
///
/// # Examples
///
/// ```
/// use textmatch::fuzzy::fuzzy_match;
///
/// let m = fuzzy_match("ANime", "A Nightmare on Elm Street").unwrap();
/// assert_eq!(m.fragments, ["A", "Ni", "m", "e"]);
/// assert_eq!(m.span, "A Nightmare");
/// assert_eq!(m.start, 0);
/// ```
pub fn fuzzy_match(pattern: &str, text: &str) -> Option<FuzzyMatch> {
    if pattern.is_empty() {
        return Some(FuzzyMatch {
            fragments: Vec::new(),
            span: String::new(),
            start: 0,
        });
    }

    let pattern_chars: Vec<char> = pattern.chars().collect();
    let text_chars: Vec<char> = text.chars().collect();

    let sets = candidates::candidate_sets(&pattern_chars, &text_chars)?;
    debug!(
        "{} candidate sets for {pattern:?}, sizes {:?}",
        sets.len(),
        sets.iter().map(Vec::len).collect::<Vec<_>>()
    );

    let alignment = align::resolve(&sets);
    Some(fragments::compress(&text_chars, &alignment))
}

/// Scores `pattern` against `text` in `[0, 1]`; higher is better, no match
/// is 0.
///
/// The score blends how densely the pattern fills its span with how small
/// the span is relative to the text, discounted by fragmentation.
///
/// # Examples
///
/// ```
/// use textmatch::fuzzy::fuzzy_score;
///
/// assert_eq!(fuzzy_score("abc", "abc"), 1.0);
/// assert_eq!(fuzzy_score("xyz", "abc"), 0.0);
/// ```
pub fn fuzzy_score(pattern: &str, text: &str) -> f64 {
    match fuzzy_match(pattern, text) {
        Some(m) => score::map_score(
            m.span.chars().count(),
            m.fragments.len(),
            pattern.chars().count(),
            text.chars().count(),
        ),
        None => 0.0,
    }
}

/// [`Ratio`] adapter over [`fuzzy_score`], for use in measure composition.
///
/// `ratio(a, b)` treats `a` as the pattern and `b` as the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatchRatio;

impl Ratio<str> for FuzzyMatchRatio {
    fn ratio_min(&self) -> f64 {
        0.0
    }

    fn ratio_max(&self) -> f64 {
        1.0
    }

    fn ratio(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        Ok(fuzzy_score(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_trivially_matches() {
        let m = fuzzy_match("", "anything").unwrap();
        assert!(m.fragments.is_empty());
        assert_eq!(m.span, "");
        assert_eq!(m.start, 0);
        assert_eq!(fuzzy_score("", "anything"), 0.0);
    }

    #[test]
    fn empty_text_never_matches() {
        assert!(fuzzy_match("a", "").is_none());
    }

    #[test]
    fn deterministic() {
        let first = fuzzy_match("Thing", "T hi hin ng g");
        for _ in 0..5 {
            assert_eq!(fuzzy_match("Thing", "T hi hin ng g"), first);
        }
    }

    #[test]
    fn case_sensitive() {
        assert!(fuzzy_match("god", "The Godfather").is_none());
        assert!(fuzzy_match("God", "The Godfather").is_some());
    }

    #[test]
    fn unicode_text() {
        let m = fuzzy_match("Hö", "Hötorget").unwrap();
        assert_eq!(m.fragments, ["Hö"]);
        assert_eq!(m.start, 0);

        // Indices count chars, not bytes.
        let m = fuzzy_match("界", "世界").unwrap();
        assert_eq!(m.start, 1);
    }

    #[test]
    fn score_prefers_contiguity() {
        assert!(fuzzy_score("God", "The Godfather") > fuzzy_score("Gfr", "The Godfather"));
    }

    #[test]
    fn ratio_adapter_delegates() {
        let r = FuzzyMatchRatio;
        assert_eq!(r.ratio("God", "The Godfather").unwrap(), fuzzy_score("God", "The Godfather"));
        assert_eq!(r.ratio_min(), 0.0);
        assert_eq!(r.ratio_max(), 1.0);
    }
}

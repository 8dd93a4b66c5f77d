//! Classical Levenshtein edit distance.

use std::mem;

use crate::MeasureError;
use crate::measures::{Metric, Ratio};

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// Two-row dynamic program, O(|a|·|b|) time and O(|b|) space.
///
/// # Examples
///
/// ```
/// use textmatch::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ach) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bch) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ach != bch);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity in `[0, 1]`: `1 - distance / max(len)`. Two empty strings are
/// identical, ratio 1.
pub fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}

/// [`Ratio`] adapter over [`levenshtein_ratio`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl Ratio<str> for LevenshteinRatio {
    fn ratio_min(&self) -> f64 {
        0.0
    }

    fn ratio_max(&self) -> f64 {
        1.0
    }

    fn ratio(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        Ok(levenshtein_ratio(a, b))
    }
}

/// [`Metric`] adapter over [`levenshtein_distance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinMetric;

impl Metric<str> for LevenshteinMetric {
    fn distance(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        Ok(levenshtein_distance(a, b) as f64)
    }
}

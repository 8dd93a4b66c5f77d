//! Overlap (Szymkiewicz–Simpson) coefficient over characters.

use std::collections::HashSet;

use crate::MeasureError;
use crate::measures::Ratio;

/// Overlap coefficient `|A ∩ B| / min(|A|, |B|)` over the character sets of
/// the two strings. Zero when either string is empty.
///
/// A subset relationship always yields 1, which makes this more forgiving
/// than Jaccard when one input is much shorter than the other.
///
/// # Examples
///
/// ```
/// use textmatch::overlap::overlap_coefficient;
///
/// assert_eq!(overlap_coefficient("ab", "abcdef"), 1.0);
/// assert_eq!(overlap_coefficient("abc", "xyz"), 0.0);
/// ```
pub fn overlap_coefficient(a: &str, b: &str) -> f64 {
    let x: HashSet<char> = a.chars().collect();
    let y: HashSet<char> = b.chars().collect();

    let smaller = x.len().min(y.len());
    if smaller == 0 {
        return 0.0;
    }

    x.intersection(&y).count() as f64 / smaller as f64
}

/// [`Ratio`] adapter over [`overlap_coefficient`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapRatio;

impl Ratio<str> for OverlapRatio {
    fn ratio_min(&self) -> f64 {
        0.0
    }

    fn ratio_max(&self) -> f64 {
        1.0
    }

    fn ratio(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        Ok(overlap_coefficient(a, b))
    }
}

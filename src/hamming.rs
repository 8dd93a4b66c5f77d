//! Exact-length Hamming distance.

use crate::MeasureError;
use crate::measures::{Metric, Ratio};

/// Counts positions at which the two strings differ.
///
/// Errors with [`MeasureError::LengthMismatch`] unless both strings have the
/// same character count.
///
/// # Examples
///
/// ```
/// use textmatch::hamming::hamming_distance;
///
/// assert_eq!(hamming_distance("karolin", "kathrin").unwrap(), 3);
/// assert!(hamming_distance("ab", "abc").is_err());
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize, MeasureError> {
    let left = a.chars().count();
    let right = b.chars().count();
    if left != right {
        return Err(MeasureError::LengthMismatch { left, right });
    }

    Ok(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Similarity in `[0, 1]`: the fraction of positions that agree. Two empty
/// strings are identical, ratio 1.
pub fn hamming_ratio(a: &str, b: &str) -> Result<f64, MeasureError> {
    let len = a.chars().count();
    let distance = hamming_distance(a, b)?;
    if len == 0 {
        return Ok(1.0);
    }

    Ok(1.0 - distance as f64 / len as f64)
}

/// [`Ratio`] adapter over [`hamming_ratio`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingRatio;

impl Ratio<str> for HammingRatio {
    fn ratio_min(&self) -> f64 {
        0.0
    }

    fn ratio_max(&self) -> f64 {
        1.0
    }

    fn ratio(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        hamming_ratio(a, b)
    }
}

/// [`Metric`] adapter over [`hamming_distance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingMetric;

impl Metric<str> for HammingMetric {
    fn distance(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        Ok(hamming_distance(a, b)? as f64)
    }
}

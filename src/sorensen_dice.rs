//! Sørensen–Dice coefficient over characters.

use std::collections::HashSet;

use crate::MeasureError;
use crate::measures::Ratio;

/// Sørensen–Dice coefficient `2 |A ∩ B| / (|A| + |B|)` over the character
/// sets of the two strings. Two empty strings are identical, coefficient 1.
///
/// # Examples
///
/// ```
/// use textmatch::sorensen_dice::sorensen_dice_coefficient;
///
/// assert_eq!(sorensen_dice_coefficient("abc", "abc"), 1.0);
/// assert_eq!(sorensen_dice_coefficient("abcd", "cdef"), 0.5);
/// ```
pub fn sorensen_dice_coefficient(a: &str, b: &str) -> f64 {
    let x: HashSet<char> = a.chars().collect();
    let y: HashSet<char> = b.chars().collect();

    if x.is_empty() && y.is_empty() {
        return 1.0;
    }

    2.0 * x.intersection(&y).count() as f64 / (x.len() + y.len()) as f64
}

/// [`Ratio`] adapter over [`sorensen_dice_coefficient`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SorensenDiceRatio;

impl Ratio<str> for SorensenDiceRatio {
    fn ratio_min(&self) -> f64 {
        0.0
    }

    fn ratio_max(&self) -> f64 {
        1.0
    }

    fn ratio(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        Ok(sorensen_dice_coefficient(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_and_identical() {
        assert_eq!(sorensen_dice_coefficient("abc", "xyz"), 0.0);
        assert_eq!(sorensen_dice_coefficient("abc", "bca"), 1.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(sorensen_dice_coefficient("", ""), 1.0);
        assert_eq!(sorensen_dice_coefficient("", "abc"), 0.0);
    }

    #[test]
    fn dominated_by_shared_fraction() {
        // {n,i,g,h,t} vs {n,a,c,h,t}: 3 shared, sizes 5 and 5.
        assert_eq!(sorensen_dice_coefficient("night", "nacht"), 0.6);
    }
}

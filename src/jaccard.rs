//! Jaccard set similarity over characters.

use std::collections::HashSet;

/// Jaccard index `|A ∩ B| / |A ∪ B|` over the character sets of the two
/// strings. Two empty strings are identical, index 1.
///
/// # Examples
///
/// ```
/// use textmatch::jaccard::jaccard_index;
///
/// assert_eq!(jaccard_index("abc", "abc"), 1.0);
/// assert_eq!(jaccard_index("abc", "xyz"), 0.0);
/// assert_eq!(jaccard_index("abcd", "abxy"), 1.0 / 3.0);
/// ```
pub fn jaccard_index(a: &str, b: &str) -> f64 {
    let x: HashSet<char> = a.chars().collect();
    let y: HashSet<char> = b.chars().collect();

    if x.is_empty() && y.is_empty() {
        return 1.0;
    }

    let intersection = x.intersection(&y).count();
    let union = x.len() + y.len() - intersection;

    intersection as f64 / union as f64
}

/// Jaccard distance, `1 - jaccard_index`.
pub fn jaccard_distance(a: &str, b: &str) -> f64 {
    1.0 - jaccard_index(a, b)
}

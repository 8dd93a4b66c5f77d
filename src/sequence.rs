//! Longest-common-block sequence matching (Ratcliff/Obershelp).
//!
//! [`SequenceMatcher`] finds the longest contiguous block common to two
//! strings, then recurses on the pieces to its left and right. The resulting
//! blocks are maximal, non-overlapping and in order; their total size drives
//! [`sequence_match_length`] and [`sequence_match_ratio`].

use std::collections::HashMap;

/// One contiguous block common to both inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    /// Start of the block in the first input (character index).
    pub a: usize,
    /// Start of the block in the second input (character index).
    pub b: usize,
    /// Block length in characters.
    pub size: usize,
}

/// Compares a pair of strings block-wise.
///
/// # Examples
///
/// ```
/// use textmatch::sequence::SequenceMatcher;
///
/// let matcher = SequenceMatcher::new("abxcd", "abcd");
/// let total: usize = matcher.matching_blocks().iter().map(|b| b.size).sum();
/// assert_eq!(total, 4);
/// ```
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each character in `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    /// Prepares a matcher for the two inputs.
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        SequenceMatcher { a, b, b2j }
    }

    /// Longest block common to `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Of all maximal blocks, returns the one starting earliest in `a` and,
    /// among those, earliest in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best = MatchingBlock {
            a: alo,
            b: blo,
            size: 0,
        };

        // j2len[j] = length of the longest block ending at a[i-1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut row: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let len = match j.checked_sub(1) {
                        Some(prev) => j2len.get(&prev).copied().unwrap_or(0) + 1,
                        None => 1,
                    };
                    row.insert(j, len);
                    if len > best.size {
                        best = MatchingBlock {
                            a: i + 1 - len,
                            b: j + 1 - len,
                            size: len,
                        };
                    }
                }
            }
            j2len = row;
        }

        best
    }

    /// All matching blocks, in order, with adjacent blocks merged.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut found = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }

            if alo < block.a && blo < block.b {
                queue.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                queue.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
            found.push(block);
        }

        found.sort_by_key(|block| (block.a, block.b));

        // Adjacent blocks can arise from the divide-and-conquer; merge them.
        let mut blocks: Vec<MatchingBlock> = Vec::with_capacity(found.len());
        for block in found {
            match blocks.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => blocks.push(block),
            }
        }

        blocks
    }
}

/// Total number of characters covered by the matching blocks.
pub fn sequence_match_length(a: &str, b: &str) -> usize {
    SequenceMatcher::new(a, b).matching_blocks().iter().map(|block| block.size).sum()
}

/// Similarity in `[0, 1]`: `2 L / (|a| + |b|)` where `L` is the total block
/// length. Two empty strings are identical, ratio 1.
///
/// # Examples
///
/// ```
/// use textmatch::sequence::sequence_match_ratio;
///
/// assert_eq!(sequence_match_ratio("abcd", "abcd"), 1.0);
/// assert_eq!(sequence_match_ratio("abcd", "bcde"), 0.75);
/// ```
pub fn sequence_match_ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }

    2.0 * sequence_match_length(a, b) as f64 / total as f64
}

//! Textmatch is a library of string-similarity primitives for approximate
//! text matching.
//!
//! The centerpiece is a contiguity-aware fuzzy subsequence matcher: it decides
//! whether a query can be read off a candidate text in order (not necessarily
//! contiguously), picks the occurrence that groups matched characters into the
//! fewest, longest runs, and converts the alignment into a single quality
//! score in `[0, 1]`. Around it sit the classical measures — Hamming,
//! Levenshtein, Jaccard, overlap, Sørensen–Dice and longest-common-block
//! sequence matching — plus a prefix trie, an injected word-embedding
//! similarity, and a small algebra for composing measures into weighted
//! scores.
//!
//! # Examples
//!
//! ```
//! use textmatch::fuzzy::{fuzzy_match, fuzzy_score};
//!
//! let m = fuzzy_match("God", "The Godfather").unwrap();
//! assert_eq!(m.fragments, ["God"]);
//! assert_eq!(m.span, "God");
//! assert_eq!(m.start, 4);
//!
//! assert!(fuzzy_score("God", "The Godfather") > fuzzy_score("Gdr", "The Godfather"));
//! assert_eq!(fuzzy_score("Q", "The Living Daylights"), 0.0);
//! ```
//!
//! Measures that implement [`Ratio`](measures::Ratio) can be combined into a
//! single weighted score:
//!
//! ```
//! use textmatch::fuzzy::FuzzyMatchRatio;
//! use textmatch::levenshtein::LevenshteinRatio;
//! use textmatch::measures::{Ratio, RatioExpr};
//!
//! let combined = RatioExpr::weighted_sum(vec![
//!     (0.8, RatioExpr::leaf(FuzzyMatchRatio)),
//!     (0.2, RatioExpr::leaf(LevenshteinRatio)),
//! ]);
//! let score = combined.ratio("Thing", "The Shining").unwrap();
//! assert!((0.0..=1.0).contains(&score));
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod embedding;
mod error;
pub mod fuzzy;
pub mod hamming;
pub mod jaccard;
pub mod levenshtein;
pub mod measures;
pub mod overlap;
pub mod sequence;
pub mod sorensen_dice;
pub mod trie;

pub use crate::error::MeasureError;
pub use crate::fuzzy::{FuzzyMatch, fuzzy_match, fuzzy_score};
pub use crate::measures::{Metric, Ratio};
pub use crate::trie::Trie;

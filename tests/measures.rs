//! Cross-measure integration: classical measures agreeing with each other
//! and composing through the expression trees.

use std::sync::Arc;

use textmatch::MeasureError;
use textmatch::embedding::{EmbeddingRatio, WordEmbedder};
use textmatch::fuzzy::FuzzyMatchRatio;
use textmatch::hamming::{HammingRatio, hamming_distance, hamming_ratio};
use textmatch::jaccard::{jaccard_distance, jaccard_index};
use textmatch::levenshtein::{LevenshteinRatio, levenshtein_distance, levenshtein_ratio};
use textmatch::measures::{Metric, MetricExpr, Ratio, RatioExpr};
use textmatch::overlap::overlap_coefficient;
use textmatch::sequence::{sequence_match_length, sequence_match_ratio};
use textmatch::sorensen_dice::sorensen_dice_coefficient;
use textmatch::trie::Trie;

#[test]
fn identical_strings_max_out_every_similarity() {
    let s = "similarity";
    assert_eq!(hamming_ratio(s, s).unwrap(), 1.0);
    assert_eq!(levenshtein_ratio(s, s), 1.0);
    assert_eq!(jaccard_index(s, s), 1.0);
    assert_eq!(overlap_coefficient(s, s), 1.0);
    assert_eq!(sorensen_dice_coefficient(s, s), 1.0);
    assert_eq!(sequence_match_ratio(s, s), 1.0);
}

#[test]
fn disjoint_strings_zero_every_similarity() {
    let (a, b) = ("abc", "xyz");
    assert_eq!(hamming_ratio(a, b).unwrap(), 0.0);
    assert_eq!(levenshtein_ratio(a, b), 0.0);
    assert_eq!(jaccard_index(a, b), 0.0);
    assert_eq!(overlap_coefficient(a, b), 0.0);
    assert_eq!(sorensen_dice_coefficient(a, b), 0.0);
    assert_eq!(sequence_match_ratio(a, b), 0.0);
}

#[test]
fn hamming_bounds_levenshtein() {
    // For equal-length strings, Levenshtein can never exceed Hamming.
    for (a, b) in [("karolin", "kathrin"), ("toned", "roses"), ("flaws", "lawns")] {
        assert!(levenshtein_distance(a, b) <= hamming_distance(a, b).unwrap());
    }
}

#[test]
fn jaccard_and_dice_agree_on_ordering() {
    // Dice is a monotone transform of Jaccard; orderings must agree.
    let pairs = [("night", "nacht"), ("abcd", "abce"), ("abc", "xbc")];
    for window in pairs.windows(2) {
        let (a1, b1) = window[0];
        let (a2, b2) = window[1];
        let jac = jaccard_index(a1, b1) < jaccard_index(a2, b2);
        let dice = sorensen_dice_coefficient(a1, b1) < sorensen_dice_coefficient(a2, b2);
        assert_eq!(jac, dice);
    }
}

#[test]
fn jaccard_index_and_distance_sum_to_one() {
    for (a, b) in [("night", "nacht"), ("", ""), ("abc", "abc"), ("ab", "cd")] {
        let total = jaccard_index(a, b) + jaccard_distance(a, b);
        assert!((total - 1.0).abs() < 1e-12, "{a:?} / {b:?}: {total}");
    }
}

#[test]
fn sequence_blocks_cover_common_text() {
    // Blocks: "p", "r", "ate".
    assert_eq!(sequence_match_length("private", "pirate"), 5);
    assert_eq!(sequence_match_ratio("private", "pirate"), 2.0 * 5.0 / 13.0);
}

#[test]
fn weighted_blend_of_similarities() {
    let blend = RatioExpr::weighted_sum(vec![
        (0.6, RatioExpr::leaf(FuzzyMatchRatio)),
        (0.4, RatioExpr::leaf(LevenshteinRatio)),
    ]);

    assert_eq!(blend.ratio_min(), 0.0);
    assert_eq!(blend.ratio_max(), 1.0);

    // Both components score the identical pair at 1.0.
    assert_eq!(blend.ratio("match", "match").unwrap(), 1.0);

    let close = blend.ratio("Thing", "The Shining").unwrap();
    let far = blend.ratio("Thing", "Reservoir Dogs").unwrap();
    assert!(close > far);
}

#[test]
fn composition_propagates_errors() {
    let blend = RatioExpr::sum(vec![
        RatioExpr::leaf(HammingRatio),
        RatioExpr::leaf(LevenshteinRatio),
    ]);
    assert!(matches!(
        blend.ratio("ab", "abc"),
        Err(MeasureError::LengthMismatch { left: 2, right: 3 })
    ));
}

#[test]
fn shifted_expression_renormalizes() {
    let shifted = RatioExpr::scalar_add(2.0, RatioExpr::scalar_mul(3.0, RatioExpr::leaf(LevenshteinRatio)));
    assert_eq!(shifted.ratio_min(), 2.0);
    assert_eq!(shifted.ratio_max(), 5.0);

    let normalized = shifted.normalized_ratio("kitten", "sitting").unwrap();
    assert!((normalized - levenshtein_ratio("kitten", "sitting")).abs() < 1e-12);
}

#[test]
fn metric_tree_over_distances() {
    let expr = MetricExpr::weighted_sum(vec![(2.0, MetricExpr::leaf(textmatch::levenshtein::LevenshteinMetric))]);
    assert_eq!(expr.distance("kitten", "sitting").unwrap(), 6.0);
    assert_eq!(expr.distance("same", "same").unwrap(), 0.0);
}

#[test]
fn trie_backs_prefix_lookup() {
    let mut trie = Trie::new();
    for title in ["The Godfather", "The Shining", "Thing"] {
        trie.insert(title);
    }

    assert!(trie.contains("Thing"));
    assert_eq!(
        trie.completions("The ").unwrap(),
        ["The Godfather", "The Shining"]
    );
    assert!(trie.completions("Q").is_none());
}

struct AxisEmbedder;

impl WordEmbedder for AxisEmbedder {
    fn embed(&self, word: &str) -> Result<Vec<f32>, MeasureError> {
        match word {
            "north" => Ok(vec![0.0, 1.0]),
            "south" => Ok(vec![0.0, -1.0]),
            "east" => Ok(vec![1.0, 0.0]),
            _ => Err(MeasureError::Embedding {
                word: word.to_string(),
                reason: "not in vocabulary".to_string(),
            }),
        }
    }
}

#[test]
fn embedding_ratio_composes_with_string_measures() {
    let model: Arc<dyn WordEmbedder> = Arc::new(AxisEmbedder);
    let blend = RatioExpr::weighted_sum(vec![
        (0.5, RatioExpr::leaf(EmbeddingRatio::new(model))),
        (0.5, RatioExpr::leaf(LevenshteinRatio)),
    ]);

    // Orthogonal vectors: only the edit-distance half contributes.
    let score = blend.ratio("north", "east").unwrap();
    assert_eq!(score, 0.5 * levenshtein_ratio("north", "east"));

    // Unknown words surface the model error through the tree.
    assert!(matches!(
        blend.ratio("north", "west"),
        Err(MeasureError::Embedding { .. })
    ));
}

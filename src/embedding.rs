//! Word-embedding similarity over an injected model.
//!
//! The embedding model itself is external: callers load one once, wrap it in
//! an [`Arc`], and hand it to [`EmbeddingRatio`]/[`EmbeddingMetric`]. The
//! model is shared read-only from then on; dropping the last handle tears it
//! down. Nothing here is lazily initialized or globally mutable.

use std::sync::Arc;

use crate::MeasureError;
use crate::measures::{Metric, Ratio};

/// A loaded embedding model that maps single words to vectors.
///
/// Implementations must be thread-safe: one model instance is shared
/// read-only between all measures referencing it.
pub trait WordEmbedder: Send + Sync {
    /// Embeds `word`. All vectors from one model must share one dimension.
    fn embed(&self, word: &str) -> Result<Vec<f32>, MeasureError>;
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter().zip(b).map(|(&x, &y)| f64::from(x) * f64::from(y)).sum()
}

fn check_dimensions(a: &[f32], b: &[f32]) -> Result<(), MeasureError> {
    if a.len() != b.len() {
        return Err(MeasureError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Cosine similarity of two vectors; 0 when either vector is all zeros
/// (an out-of-vocabulary word has no direction to compare).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, MeasureError> {
    check_dimensions(a, b)?;

    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot(a, b) / (norm_a * norm_b))
}

/// Euclidean distance between two vectors.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Result<f64, MeasureError> {
    check_dimensions(a, b)?;

    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum();
    Ok(sum.sqrt())
}

/// [`Ratio`] over an injected embedding model: cosine similarity of the two
/// word vectors.
#[derive(Clone)]
pub struct EmbeddingRatio {
    model: Arc<dyn WordEmbedder>,
}

impl EmbeddingRatio {
    /// Wraps a loaded model.
    pub fn new(model: Arc<dyn WordEmbedder>) -> Self {
        EmbeddingRatio { model }
    }
}

impl Ratio<str> for EmbeddingRatio {
    fn ratio_min(&self) -> f64 {
        0.0
    }

    fn ratio_max(&self) -> f64 {
        1.0
    }

    fn ratio(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        let va = self.model.embed(a)?;
        let vb = self.model.embed(b)?;
        cosine_similarity(&va, &vb)
    }
}

/// [`Metric`] over an injected embedding model: euclidean distance of the two
/// word vectors.
#[derive(Clone)]
pub struct EmbeddingMetric {
    model: Arc<dyn WordEmbedder>,
}

impl EmbeddingMetric {
    /// Wraps a loaded model.
    pub fn new(model: Arc<dyn WordEmbedder>) -> Self {
        EmbeddingMetric { model }
    }
}

impl Metric<str> for EmbeddingMetric {
    fn distance(&self, a: &str, b: &str) -> Result<f64, MeasureError> {
        let va = self.model.embed(a)?;
        let vb = self.model.embed(b)?;
        euclidean_distance(&va, &vb)
    }
}

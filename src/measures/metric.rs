//! The [`Metric`] trait and its composition tree.

use crate::MeasureError;

/// A distance between two values, for use in metric trees and nearest-
/// neighbor structures.
///
/// Implementors should satisfy the metric-space laws:
///
/// - `distance(x, x) == 0`
/// - `distance(x, y) > 0` when `x != y`
/// - `distance(x, y) == distance(y, x)`
/// - `distance(a, b) + distance(b, c) >= distance(a, c)`
pub trait Metric<T: ?Sized> {
    /// Computes the distance between `a` and `b`.
    fn distance(&self, a: &T, b: &T) -> Result<f64, MeasureError>;
}

/// A composed distance expression over [`Metric`] leaves.
///
/// Non-negative weights preserve the metric laws; the tree itself implements
/// [`Metric`] so compositions nest.
pub enum MetricExpr<T: ?Sized> {
    /// A single concrete metric.
    Leaf(Box<dyn Metric<T>>),
    /// Sum of sub-expression distances.
    Sum(Vec<MetricExpr<T>>),
    /// A sub-expression distance scaled by a weight.
    Scaled(f64, Box<MetricExpr<T>>),
    /// Weighted sum of sub-expression distances.
    WeightedSum(Vec<(f64, MetricExpr<T>)>),
}

impl<T: ?Sized> MetricExpr<T> {
    /// Wraps a concrete metric as a leaf.
    pub fn leaf(metric: impl Metric<T> + 'static) -> Self {
        MetricExpr::Leaf(Box::new(metric))
    }

    /// Sums the given sub-expressions.
    pub fn sum(terms: Vec<MetricExpr<T>>) -> Self {
        MetricExpr::Sum(terms)
    }

    /// Scales the sub-expression by `weight`.
    pub fn scaled(weight: f64, inner: MetricExpr<T>) -> Self {
        MetricExpr::Scaled(weight, Box::new(inner))
    }

    /// Sums the given sub-expressions with per-term weights.
    pub fn weighted_sum(terms: Vec<(f64, MetricExpr<T>)>) -> Self {
        MetricExpr::WeightedSum(terms)
    }
}

impl<T: ?Sized> Metric<T> for MetricExpr<T> {
    fn distance(&self, a: &T, b: &T) -> Result<f64, MeasureError> {
        match self {
            MetricExpr::Leaf(metric) => metric.distance(a, b),
            MetricExpr::Sum(terms) => {
                let mut total = 0.0;
                for term in terms {
                    total += term.distance(a, b)?;
                }
                Ok(total)
            }
            MetricExpr::Scaled(weight, inner) => Ok(weight * inner.distance(a, b)?),
            MetricExpr::WeightedSum(terms) => {
                let mut total = 0.0;
                for (weight, term) in terms {
                    total += weight * term.distance(a, b)?;
                }
                Ok(total)
            }
        }
    }
}

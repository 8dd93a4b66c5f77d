//! The [`Ratio`] trait and its composition tree.

use crate::MeasureError;

/// A bounded similarity score between two values.
///
/// Implementors report their score range through [`ratio_min`] and
/// [`ratio_max`] so that compositions can be renormalized; most concrete
/// measures in this crate score in `[0, 1]` already.
///
/// [`ratio_min`]: Ratio::ratio_min
/// [`ratio_max`]: Ratio::ratio_max
pub trait Ratio<T: ?Sized> {
    /// Lowest value [`ratio`](Ratio::ratio) can produce.
    fn ratio_min(&self) -> f64;

    /// Highest value [`ratio`](Ratio::ratio) can produce.
    fn ratio_max(&self) -> f64;

    /// Scores `a` against `b`.
    fn ratio(&self, a: &T, b: &T) -> Result<f64, MeasureError>;

    /// Scores `a` against `b`, min-max rescaled into `[0, 1]` when the
    /// declared bounds fall outside the unit interval. Bounds already inside
    /// the unit interval pass the raw score through untouched.
    fn normalized_ratio(&self, a: &T, b: &T) -> Result<f64, MeasureError> {
        let min = self.ratio_min();
        let max = self.ratio_max();
        let raw = self.ratio(a, b)?;

        if (0.0..=1.0).contains(&min) && (0.0..=1.0).contains(&max) {
            return Ok(raw);
        }

        Ok((raw - min) / (max - min))
    }
}

/// A composed scoring expression over [`Ratio`] leaves.
///
/// This is the tagged-variant rendering of an operator algebra: sums,
/// weighted sums and products of scores, plus scalar shifts and scales.
/// Bounds fold structurally over the tree, so a composed expression knows its
/// own range and [`normalized_ratio`](Ratio::normalized_ratio) keeps working.
///
/// # Examples
///
/// ```
/// use textmatch::fuzzy::FuzzyMatchRatio;
/// use textmatch::levenshtein::LevenshteinRatio;
/// use textmatch::measures::{Ratio, RatioExpr};
///
/// let expr = RatioExpr::scalar_add(
///     1.0,
///     RatioExpr::weighted_sum(vec![
///         (2.0, RatioExpr::leaf(FuzzyMatchRatio)),
///         (1.0, RatioExpr::leaf(LevenshteinRatio)),
///     ]),
/// );
/// assert_eq!(expr.ratio_min(), 1.0);
/// assert_eq!(expr.ratio_max(), 4.0);
///
/// let normalized = expr.normalized_ratio("kitten", "sitting").unwrap();
/// assert!((0.0..=1.0).contains(&normalized));
/// ```
pub enum RatioExpr<T: ?Sized> {
    /// A single concrete measure.
    Leaf(Box<dyn Ratio<T>>),
    /// Sum of sub-expression scores.
    Sum(Vec<RatioExpr<T>>),
    /// Weighted sum of sub-expression scores.
    WeightedSum(Vec<(f64, RatioExpr<T>)>),
    /// Product of sub-expression scores.
    Product(Vec<RatioExpr<T>>),
    /// A scalar added to a sub-expression score.
    ScalarAdd(f64, Box<RatioExpr<T>>),
    /// A sub-expression score scaled by a scalar.
    ScalarMul(f64, Box<RatioExpr<T>>),
}

impl<T: ?Sized> RatioExpr<T> {
    /// Wraps a concrete measure as a leaf.
    pub fn leaf(measure: impl Ratio<T> + 'static) -> Self {
        RatioExpr::Leaf(Box::new(measure))
    }

    /// Sums the given sub-expressions.
    pub fn sum(terms: Vec<RatioExpr<T>>) -> Self {
        RatioExpr::Sum(terms)
    }

    /// Sums the given sub-expressions with per-term weights.
    pub fn weighted_sum(terms: Vec<(f64, RatioExpr<T>)>) -> Self {
        RatioExpr::WeightedSum(terms)
    }

    /// Multiplies the given sub-expressions.
    pub fn product(factors: Vec<RatioExpr<T>>) -> Self {
        RatioExpr::Product(factors)
    }

    /// Adds `scalar` to the sub-expression's score.
    pub fn scalar_add(scalar: f64, inner: RatioExpr<T>) -> Self {
        RatioExpr::ScalarAdd(scalar, Box::new(inner))
    }

    /// Scales the sub-expression's score by `scalar`.
    pub fn scalar_mul(scalar: f64, inner: RatioExpr<T>) -> Self {
        RatioExpr::ScalarMul(scalar, Box::new(inner))
    }

    /// Evaluates the tree with `leaf` supplying the value at each concrete
    /// measure.
    fn visit(&self, leaf: &impl Fn(&dyn Ratio<T>) -> Result<f64, MeasureError>) -> Result<f64, MeasureError> {
        match self {
            RatioExpr::Leaf(measure) => leaf(measure.as_ref()),
            RatioExpr::Sum(terms) => {
                let mut total = 0.0;
                for term in terms {
                    total += term.visit(leaf)?;
                }
                Ok(total)
            }
            RatioExpr::WeightedSum(terms) => {
                let mut total = 0.0;
                for (weight, term) in terms {
                    total += weight * term.visit(leaf)?;
                }
                Ok(total)
            }
            RatioExpr::Product(factors) => {
                let mut total = 1.0;
                for factor in factors {
                    total *= factor.visit(leaf)?;
                }
                Ok(total)
            }
            RatioExpr::ScalarAdd(scalar, inner) => Ok(scalar + inner.visit(leaf)?),
            RatioExpr::ScalarMul(scalar, inner) => Ok(scalar * inner.visit(leaf)?),
        }
    }

    /// Bound folding follows the same structure but cannot fail.
    fn fold_bounds(&self, leaf: &impl Fn(&dyn Ratio<T>) -> f64) -> f64 {
        match self {
            RatioExpr::Leaf(measure) => leaf(measure.as_ref()),
            RatioExpr::Sum(terms) => terms.iter().map(|term| term.fold_bounds(leaf)).sum(),
            RatioExpr::WeightedSum(terms) => terms
                .iter()
                .map(|(weight, term)| weight * term.fold_bounds(leaf))
                .sum(),
            RatioExpr::Product(factors) => factors.iter().map(|factor| factor.fold_bounds(leaf)).product(),
            RatioExpr::ScalarAdd(scalar, inner) => scalar + inner.fold_bounds(leaf),
            RatioExpr::ScalarMul(scalar, inner) => scalar * inner.fold_bounds(leaf),
        }
    }
}

impl<T: ?Sized> Ratio<T> for RatioExpr<T> {
    fn ratio_min(&self) -> f64 {
        self.fold_bounds(&|measure| measure.ratio_min())
    }

    fn ratio_max(&self) -> f64 {
        self.fold_bounds(&|measure| measure.ratio_max())
    }

    fn ratio(&self, a: &T, b: &T) -> Result<f64, MeasureError> {
        self.visit(&|measure| measure.ratio(a, b))
    }
}

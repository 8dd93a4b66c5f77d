//! Measure traits and the composition algebra.
//!
//! Similarity measures implement [`Ratio`] (bounded scores, usually in
//! `[0, 1]`); distances implement [`Metric`]. Either kind can be combined
//! into weighted expressions through [`RatioExpr`] and [`MetricExpr`].

pub mod metric;
pub mod ratio;

pub use metric::{Metric, MetricExpr};
pub use ratio::{Ratio, RatioExpr};

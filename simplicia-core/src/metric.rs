//! Distance queries over sets whose elements carry a metric.

use thiserror::Error;

use crate::set::Set;

/// A symmetric, non-negative distance between values of one type.
///
/// This is the only capability the set layer imposes on element types to
/// support nearest-neighbour style queries.
pub trait Metric {
    fn distance(&self, other: &Self) -> f64;
}

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum MetricError {
    /// A distance query was posed over a set with no elements.
    #[error("distance query over an empty collection")]
    EmptyCollection,
}

impl<T: Metric + PartialEq> Set<T> {
    /// Smallest distance from `point` to any element of the set.
    pub fn distance_from(&self, point: &T) -> Result<f64, MetricError> {
        if self.is_empty() {
            return Err(MetricError::EmptyCollection);
        }
        Ok(self
            .iter()
            .map(|e| point.distance(e))
            .fold(f64::INFINITY, f64::min))
    }

    /// Smallest distance between an element of `self` and one of `other`.
    pub fn distance(&self, other: &Set<T>) -> Result<f64, MetricError> {
        if self.is_empty() || other.is_empty() {
            return Err(MetricError::EmptyCollection);
        }
        Ok(self
            .iter()
            .map(|e| {
                other
                    .iter()
                    .map(|f| e.distance(f))
                    .fold(f64::INFINITY, f64::min)
            })
            .fold(f64::INFINITY, f64::min))
    }

    /// The element nearest to `point`, ties resolved by insertion order.
    pub fn closest(&self, point: &T) -> Result<&T, MetricError> {
        let mut best: Option<(&T, f64)> = None;
        for element in self.iter() {
            let d = point.distance(element);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((element, d));
            }
        }
        best.map(|(e, _)| e).ok_or(MetricError::EmptyCollection)
    }
}

impl Metric for f64 {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs()
    }
}

impl Metric for i64 {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs() as f64
    }
}

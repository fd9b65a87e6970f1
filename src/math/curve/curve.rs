use crate::math::curve::domain::Domain;
use crate::math::curve::point::Point2D;

/// A real function that can be discretized over a [`Domain`].
///
/// Implementors freeze their parameters at construction, so every call to
/// `evaluate` builds a fresh, independent set of points.
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    fn evaluate_on(&self, domain: &Domain) -> Vec<Point2D> {
        domain
            .iter()
            .map(|x| Point2D::new(x, self.value(x)))
            .collect()
    }

    /// Samples `[xmin, xmax)` in `samples` increments with accumulated stepping.
    fn evaluate(&self, xmin: f64, xmax: f64, samples: usize) -> Vec<Point2D> {
        self.evaluate_on(&Domain::new(xmin, xmax, samples))
    }
}

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::math::curve::point::Point2D;
use crate::model::modelerror::ModelError;

/// Draws points from a discretized curve, uniformly by index and with replacement.
pub struct Sampler {
    rng: SmallRng
}

impl Sampler {
    /// Reproducible sampler.
    pub fn seeded(seed: u64) -> Sampler {
        Sampler { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Sampler seeded from the operating system.
    pub fn from_entropy() -> Sampler {
        Sampler { rng: SmallRng::from_os_rng() }
    }

    pub fn with_seed(seed: Option<u64>) -> Sampler {
        seed.map_or_else(Sampler::from_entropy, Sampler::seeded)
    }

    /// Returns `size` points in draw order.
    pub fn sample(&mut self, curve: &[Point2D], size: usize) -> Result<Vec<Point2D>, ModelError> {
        if curve.is_empty() {
            return Err(ModelError::EmptyCurve("sample"));
        }
        Ok((0..size)
            .map(|_| curve[self.rng.random_range(0..curve.len())])
            .collect())
    }
}

/// Running sum of `y`. The first point is copied unchanged, every later
/// point is reindexed to `x = i`.
pub fn accumulate(curve: &[Point2D]) -> Result<Vec<Point2D>, ModelError> {
    let (first, rest) = curve
        .split_first()
        .ok_or(ModelError::EmptyCurve("accumulate"))?;

    let mut accumulated = Vec::with_capacity(curve.len());
    accumulated.push(*first);
    let mut running = first.y();
    for (offset, pt) in rest.iter().enumerate() {
        running += pt.y();
        accumulated.push(Point2D::new((offset + 1) as f64, running));
    }
    Ok(accumulated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> Vec<Point2D> {
        vec![
            Point2D::new(-1.5, 0.25),
            Point2D::new(-0.5, 0.5),
            Point2D::new(0.5, 0.125),
            Point2D::new(1.5, 0.125)
        ]
    }

    #[test]
    fn accumulate_sums_and_reindexes() {
        let acc = accumulate(&curve()).unwrap();
        assert_eq!(
            acc,
            vec![
                Point2D::new(-1.5, 0.25),
                Point2D::new(1.0, 0.75),
                Point2D::new(2.0, 0.875),
                Point2D::new(3.0, 1.0)
            ]
        );
    }

    #[test]
    fn accumulate_rejects_empty_curve() {
        assert!(matches!(accumulate(&[]), Err(ModelError::EmptyCurve("accumulate"))));
    }

    #[test]
    fn sample_draws_requested_count_from_curve() {
        let source = curve();
        let mut sampler = Sampler::seeded(7);
        let drawn = sampler.sample(&source, 50).unwrap();
        assert_eq!(drawn.len(), 50);
        assert!(drawn.iter().all(|pt| source.contains(pt)));
    }

    #[test]
    fn same_seed_same_draws() {
        let source = curve();
        let a = Sampler::seeded(42).sample(&source, 20).unwrap();
        let b = Sampler::seeded(42).sample(&source, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sample_rejects_empty_curve() {
        let mut sampler = Sampler::from_entropy();
        assert!(matches!(sampler.sample(&[], 3), Err(ModelError::EmptyCurve("sample"))));
    }
}

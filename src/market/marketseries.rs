use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::point::Point2D;
use crate::model::modelerror::ModelError;

/// The two aligned series the location parameter is driven by.
///
/// `underlying` (`u`) is the reference series, `derived` (`p`) the price or
/// prior risk estimate derived from it. Both are indexed by tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSeries {
    underlying: Vec<Point2D>,
    derived: Vec<Point2D>
}

impl MarketSeries {
    pub fn new(underlying: Vec<Point2D>, derived: Vec<Point2D>) -> MarketSeries {
        MarketSeries { underlying, derived }
    }

    /// Builds both series from plain values, using the tick as `x`.
    pub fn from_values(underlying: &[f64], derived: &[f64]) -> MarketSeries {
        let to_points = |values: &[f64]| {
            values
                .iter()
                .enumerate()
                .map(|(tick, &y)| Point2D::new(tick as f64, y))
                .collect::<Vec<Point2D>>()
        };
        MarketSeries::new(to_points(underlying), to_points(derived))
    }

    pub fn underlying(&self) -> &[Point2D] {
        &self.underlying
    }

    pub fn derived(&self) -> &[Point2D] {
        &self.derived
    }

    pub fn underlying_at(&self, tick: usize) -> Result<f64, ModelError> {
        Self::value_at(&self.underlying, "underlying", tick)
    }

    pub fn derived_at(&self, tick: usize) -> Result<f64, ModelError> {
        Self::value_at(&self.derived, "derived", tick)
    }

    fn value_at(series: &[Point2D], name: &'static str, tick: usize) -> Result<f64, ModelError> {
        series
            .get(tick)
            .map(|pt| pt.y())
            .ok_or_else(|| ModelError::SeriesTooShort {
                series: name,
                required: tick,
                length: series.len()
            })
    }
}

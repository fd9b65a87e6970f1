use tracing::{
    debug,
    trace
};

use crate::clearing::intersectionfinder::find_intersect;
use crate::distribution::gumbeldistribution::GumbelParameters;
use crate::market::marketseries::MarketSeries;
use crate::math::curve::domain::Domain;
use crate::math::curve::point::Point2D;
use crate::model::modelerror::ModelError;

/// First tick every location term can be evaluated at.
pub const FIRST_TICK: usize = 2;

/// Replays the clearing search over every tick a pair of series supports.
pub struct ClearingSimulation {
    buyer: GumbelParameters,
    seller: GumbelParameters,
    domain: Domain
}

impl ClearingSimulation {
    pub fn new(buyer: GumbelParameters,
               seller: GumbelParameters,
               domain: Domain) -> ClearingSimulation {
        ClearingSimulation { buyer, seller, domain }
    }

    pub fn buyer(&self) -> &GumbelParameters {
        &self.buyer
    }

    pub fn seller(&self) -> &GumbelParameters {
        &self.seller
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Ticks with `u[tick]` and `p[tick - 1]` available, starting at [`FIRST_TICK`].
    pub fn ticks(series: &MarketSeries) -> std::ops::Range<usize> {
        let last = series
            .underlying()
            .len()
            .saturating_sub(1)
            .min(series.derived().len());
        FIRST_TICK..(last + 1).max(FIRST_TICK)
    }

    /// Clearing price per tick as `{x: tick, y: price}`. Ticks without an
    /// intersection are left out.
    pub fn run(&self, series: &MarketSeries) -> Result<Vec<Point2D>, ModelError> {
        let mut prices = Vec::new();
        for tick in Self::ticks(series) {
            let intersection = find_intersect(&self.buyer, &self.seller, series, tick, &self.domain)?;
            trace!(tick, price = intersection.x(), "clearing");
            if intersection.is_found() {
                prices.push(Point2D::new(tick as f64, intersection.x()));
            }
        }
        debug!(ticks = prices.len(), "clearing simulation finished");
        Ok(prices)
    }
}

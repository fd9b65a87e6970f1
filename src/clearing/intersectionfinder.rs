use serde::{
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::distribution::gumbeldistribution::{
    GumbelDistribution,
    GumbelParameters
};
use crate::market::marketseries::MarketSeries;
use crate::math::curve::domain::Domain;
use crate::model::modelerror::ModelError;

/// Larger than any difference of two probabilities.
const INITIAL_MIN_DISTANCE: f64 = 5000.0;

/// Where the buyer's survival curve meets the seller's cumulative curve.
///
/// `x` is the clearing price, `y` the seller's rounded CDF there. A scan over
/// an empty domain yields [`Intersection::NOT_FOUND`], i.e. `(-1, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    x: f64,
    y: f64
}

impl Intersection {
    pub const NOT_FOUND: Intersection = Intersection { x: -1.0, y: -1.0 };

    pub fn new(x: f64, y: f64) -> Intersection {
        Intersection { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_found(&self) -> bool {
        *self != Intersection::NOT_FOUND
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Linear scan of `domain` for the point minimizing `|(1 - buyer_cdf) - seller_cdf|`.
///
/// Both CDFs are rounded to 4 decimals before comparing and the first minimum
/// wins. The series are not read at all when the domain is empty.
pub fn find_intersect(buyer: &GumbelParameters,
                      seller: &GumbelParameters,
                      series: &MarketSeries,
                      tick: usize,
                      domain: &Domain) -> Result<Intersection, ModelError> {
    if domain.is_empty() {
        debug!(xmin = domain.xmin(), xmax = domain.xmax(), samples = domain.samples(), "empty domain, no intersection");
        return Ok(Intersection::NOT_FOUND);
    }

    let buyer_dist = GumbelDistribution::new(series, tick, buyer)?;
    let seller_dist = GumbelDistribution::new(series, tick, seller)?;

    let mut min_distance = INITIAL_MIN_DISTANCE;
    let mut result = Intersection::NOT_FOUND;
    for x in domain {
        let b = buyer_dist.rounded_cdf(x);
        let s = seller_dist.rounded_cdf(x);
        let diff = ((1.0 - b) - s).abs();
        if diff < min_distance {
            min_distance = diff;
            result = Intersection::new(x, s);
        }
    }

    debug!(tick, x = result.x, y = result.y, min_distance, "intersection");
    Ok(result)
}

/// [`find_intersect`] over `[xmin, xmax)` in `samples` accumulated increments.
pub fn find_intersect_in(buyer: &GumbelParameters,
                         seller: &GumbelParameters,
                         series: &MarketSeries,
                         tick: usize,
                         xmin: f64,
                         xmax: f64,
                         samples: usize) -> Result<Intersection, ModelError> {
    find_intersect(buyer, seller, series, tick, &Domain::new(xmin, xmax, samples))
}

use serde::{
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::market::marketseries::MarketSeries;
use crate::math::curve::curve::Curve;
use crate::math::round::round_probability;
use crate::model::locationparameter::LocationWeights;
use crate::model::modelerror::ModelError;

// ─────────────────────────────────────────────────────────────────────────────
// GumbelParameters
// ─────────────────────────────────────────────────────────────────────────────

fn validate_scale(delta: f64) -> Result<f64, ModelError> {
    let delta = ModelError::ensure_finite("delta", delta)?;
    if delta == 0.0 {
        Err(ModelError::invalid_parameter("delta", delta, "must be non-zero"))
    } else {
        Ok(delta)
    }
}

/// Weights of the location terms plus the scale `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GumbelParameters {
    pub alpha: f64,
    pub tau: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64
}

impl GumbelParameters {
    pub fn new(alpha: f64, tau: f64, beta: f64, gamma: f64, delta: f64) -> GumbelParameters {
        GumbelParameters { alpha, tau, beta, gamma, delta }
    }

    pub fn weights(&self) -> Result<LocationWeights, ModelError> {
        LocationWeights::new(self.alpha, self.tau, self.beta, self.gamma)
    }

    pub fn scale(&self) -> Result<f64, ModelError> {
        validate_scale(self.delta)
    }
}

impl From<[f64; 5]> for GumbelParameters {
    fn from(values: [f64; 5]) -> GumbelParameters {
        let [alpha, tau, beta, gamma, delta] = values;
        GumbelParameters::new(alpha, tau, beta, gamma, delta)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GumbelDistribution
// ─────────────────────────────────────────────────────────────────────────────

/// Gumbel distribution whose location `q` is frozen from the market state at
/// construction time.
#[derive(Debug, Clone, Copy)]
pub struct GumbelDistribution {
    location: f64,
    scale: f64
}

impl GumbelDistribution {
    pub fn new(series: &MarketSeries,
               tick: usize,
               parameters: &GumbelParameters) -> Result<GumbelDistribution, ModelError> {
        let scale = parameters.scale()?;
        let location = parameters.weights()?.location(series, tick)?;
        debug!(tick, location, scale, "gumbel distribution");
        Ok(GumbelDistribution { location, scale })
    }

    pub fn from_location(location: f64, scale: f64) -> Result<GumbelDistribution, ModelError> {
        let location = ModelError::ensure_finite("location", location)?;
        let scale = validate_scale(scale)?;
        Ok(GumbelDistribution { location, scale })
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.location) / self.scale
    }

    pub fn pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        (-(z + (-z).exp())).exp() / self.scale
    }

    pub fn cdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        (-(-z).exp()).exp()
    }

    /// CDF rounded to 4 decimals, the form every comparison works on.
    pub fn rounded_cdf(&self, x: f64) -> f64 {
        round_probability(self.cdf(x))
    }

    pub fn density(self) -> GumbelPdf {
        GumbelPdf(self)
    }

    pub fn cumulative(self) -> GumbelCdf {
        GumbelCdf(self)
    }
}

/// Density of a [`GumbelDistribution`] as a [`Curve`].
#[derive(Debug, Clone, Copy)]
pub struct GumbelPdf(GumbelDistribution);

impl GumbelPdf {
    pub fn distribution(&self) -> &GumbelDistribution {
        &self.0
    }
}

impl Curve for GumbelPdf {
    fn value(&self, x: f64) -> f64 {
        self.0.pdf(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        let z = self.0.standardize(x);
        self.0.pdf(x) * ((-z).exp() - 1.0) / self.0.scale
    }
}

/// Rounded cumulative distribution of a [`GumbelDistribution`] as a [`Curve`].
#[derive(Debug, Clone, Copy)]
pub struct GumbelCdf(GumbelDistribution);

impl GumbelCdf {
    pub fn distribution(&self) -> &GumbelDistribution {
        &self.0
    }
}

impl Curve for GumbelCdf {
    fn value(&self, x: f64) -> f64 {
        self.0.rounded_cdf(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.0.pdf(x)
    }
}

pub fn gumbel_pdf(series: &MarketSeries,
                  tick: usize,
                  parameters: &GumbelParameters) -> Result<GumbelPdf, ModelError> {
    Ok(GumbelDistribution::new(series, tick, parameters)?.density())
}

pub fn gumbel_cdf(series: &MarketSeries,
                  tick: usize,
                  parameters: &GumbelParameters) -> Result<GumbelCdf, ModelError> {
    Ok(GumbelDistribution::new(series, tick, parameters)?.cumulative())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::curve::point::Point2D;

    fn series() -> MarketSeries {
        MarketSeries::from_values(&[10.0, 11.0, 12.5, 12.0], &[10.2, 10.8, 12.0, 12.4])
    }

    #[test]
    fn zero_weights_put_location_at_origin() {
        let params = GumbelParameters::new(0.0, 1.0, 0.0, 0.0, 1.0);
        let cdf = gumbel_cdf(&series(), 2, &params).unwrap();
        assert_eq!(cdf.distribution().location(), 0.0);
        assert_eq!(cdf.value(0.0), 0.3679);
        assert_eq!(cdf.evaluate(0.0, 1.0, 1), vec![Point2D::new(0.0, 0.3679)]);
    }

    #[test]
    fn location_is_frozen_at_construction() {
        let params = GumbelParameters::new(1.0, 2.0, 0.5, 2.0, 1.5);
        let pdf = gumbel_pdf(&series(), 3, &params).unwrap();
        let expected = -(-1.0f64).exp() + 0.6 - 1.0;
        assert!((pdf.distribution().location() - expected).abs() < 1e-12);
        assert_eq!(pdf.distribution().scale(), 1.5);
    }

    #[test]
    fn pdf_peaks_at_location() {
        let dist = GumbelDistribution::from_location(0.5, 2.0).unwrap();
        assert!((dist.pdf(0.5) - (-1.0f64).exp() / 2.0).abs() < 1e-12);
        assert!(dist.density().derivative(0.5).abs() < 1e-12);
    }

    #[test]
    fn cdf_is_monotone_and_bounded() {
        let params = GumbelParameters::new(1.0, 2.0, 0.5, 2.0, 1.0);
        let cdf = gumbel_cdf(&series(), 3, &params).unwrap();
        let pts = cdf.evaluate(-10.0, 10.0, 200);
        assert!(pts.iter().all(|pt| (0.0..=1.0).contains(&pt.y())));
        assert!(pts.windows(2).all(|w| w[0].y() <= w[1].y()));
        assert_eq!(pts.first().unwrap().y(), 0.0);
        assert_eq!(pts.last().unwrap().y(), 1.0);
    }

    #[test]
    fn pdf_is_rate_of_change_of_cdf() {
        let dist = GumbelDistribution::from_location(-0.4, 1.0).unwrap();
        let cdf = dist.cumulative().evaluate(-4.0, 6.0, 100);
        for w in cdf.windows(2) {
            let slope = Point2D::slope(&w[0], &w[1]);
            let mid = 0.5 * (w[0].x() + w[1].x());
            assert!((slope - dist.pdf(mid)).abs() < 5e-3, "x = {}", mid);
        }
        assert_eq!(dist.cumulative().derivative(1.0), dist.pdf(1.0));
    }

    #[test]
    fn zero_scale_is_invalid() {
        let params = GumbelParameters::new(0.0, 1.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            gumbel_cdf(&series(), 2, &params),
            Err(ModelError::InvalidParameter { name: "delta", .. })
        ));
    }

    #[test]
    fn tick_below_two_is_a_bounds_error() {
        let params = GumbelParameters::new(1.0, 1.0, 1.0, 1.0, 1.0);
        assert!(matches!(
            gumbel_pdf(&series(), 1, &params),
            Err(ModelError::TickTooSmall { term: "momentum", .. })
        ));
    }

    #[test]
    fn parameters_from_array() {
        let params = GumbelParameters::from([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(params.gamma, 4.0);
        assert_eq!(params.delta, 5.0);
    }
}

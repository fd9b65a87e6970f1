use std::f64::consts::PI;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::Curve;
use crate::model::modelerror::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalParameters {
    pub mean: f64,
    pub variance: f64
}

/// Normal density with the coefficient and exponent denominator precomputed.
#[derive(Debug, Clone, Copy)]
pub struct NormalDistribution {
    mean: f64,
    variance: f64,
    coeff: f64,
    denom: f64
}

impl NormalDistribution {
    pub fn new(mean: f64, variance: f64) -> Result<NormalDistribution, ModelError> {
        let mean = ModelError::ensure_finite("mean", mean)?;
        let variance = ModelError::ensure_finite("variance", variance)?;
        if variance <= 0.0 {
            return Err(ModelError::invalid_parameter("variance", variance, "must be positive"));
        }
        Ok(NormalDistribution {
            mean,
            variance,
            coeff: 1.0 / (variance.sqrt() * (2.0 * PI).sqrt()),
            denom: 2.0 * variance
        })
    }

    pub fn from_parameters(parameters: &NormalParameters) -> Result<NormalDistribution, ModelError> {
        Self::new(parameters.mean, parameters.variance)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn pdf(&self, x: f64) -> f64 {
        self.coeff * (-(x - self.mean).powi(2) / self.denom).exp()
    }
}

impl Curve for NormalDistribution {
    fn value(&self, x: f64) -> f64 {
        self.pdf(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        -(x - self.mean) / self.variance * self.pdf(x)
    }
}

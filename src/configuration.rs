use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use tracing::info;

use crate::distribution::gumbeldistribution::GumbelParameters;
use crate::distribution::normaldistribution::NormalParameters;
use crate::market::marketseries::MarketSeries;
use crate::math::curve::domain::Domain;
use crate::model::modelerror::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfiguration {
    pub size: usize,
    #[serde(default)]
    pub seed: Option<u64>
}

/// Everything one model run needs. Parameters are validated when the model
/// objects are built from them, not while parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    series: MarketSeries,
    tick: usize,
    domain: Domain,
    buyer: GumbelParameters,
    seller: GumbelParameters,
    #[serde(default)]
    normal: Option<NormalParameters>,
    #[serde(default)]
    sampling: Option<SamplingConfiguration>
}

impl Configuration {
    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ModelError> {
        let config: Configuration = serde_json::from_reader(reader)?;
        info!(
            tick = config.tick,
            underlying = config.series.underlying().len(),
            derived = config.series.derived().len(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ModelError> {
        let file = File::open(file_path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn series(&self) -> &MarketSeries {
        &self.series
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn buyer(&self) -> &GumbelParameters {
        &self.buyer
    }

    pub fn seller(&self) -> &GumbelParameters {
        &self.seller
    }

    pub fn normal(&self) -> Option<&NormalParameters> {
        self.normal.as_ref()
    }

    pub fn sampling(&self) -> Option<&SamplingConfiguration> {
        self.sampling.as_ref()
    }
}

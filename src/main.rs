use std::env;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use clearingcurve::clearing::clearingsimulation::ClearingSimulation;
use clearingcurve::clearing::intersectionfinder::find_intersect;
use clearingcurve::configuration::Configuration;
use clearingcurve::distribution::gumbeldistribution::{
    gumbel_cdf,
    gumbel_pdf
};
use clearingcurve::distribution::normaldistribution::NormalDistribution;
use clearingcurve::math::curve::curve::Curve;
use clearingcurve::model::modelerror::ModelError;
use clearingcurve::sampling::sampler::{
    accumulate,
    Sampler
};

const DEFAULT_CONFIG_PATH: &str = "json/config.json";

fn main() -> Result<(), ModelError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let config = Configuration::from_path(&config_path)?;
    let series = config.series();
    let tick = config.tick();
    let domain = config.domain();

    let buyer_pdf = gumbel_pdf(series, tick, config.buyer())?.evaluate_on(domain);
    let seller_cdf = gumbel_cdf(series, tick, config.seller())?.evaluate_on(domain);
    let buyer_cdf = gumbel_cdf(series, tick, config.buyer())?.evaluate_on(domain);

    let normal_pdf = match config.normal() {
        Some(parameters) => Some(NormalDistribution::from_parameters(parameters)?.evaluate_on(domain)),
        None => None
    };

    let samples = match config.sampling() {
        Some(sampling) => {
            let mut sampler = Sampler::with_seed(sampling.seed);
            let drawn = sampler.sample(&buyer_pdf, sampling.size)?;
            Some(json!({ "drawn": drawn, "accumulated": accumulate(&drawn)? }))
        },
        None => None
    };

    let intersection = find_intersect(config.buyer(), config.seller(), series, tick, domain)?;
    let clearing = ClearingSimulation::new(*config.buyer(), *config.seller(), *domain).run(series)?;

    let output = json!({
        "tick": tick,
        "buyer_pdf": buyer_pdf,
        "buyer_cdf": buyer_cdf,
        "seller_cdf": seller_cdf,
        "normal_pdf": normal_pdf,
        "samples": samples,
        "intersection": intersection,
        "clearing_prices": clearing
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

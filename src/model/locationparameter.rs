use serde::{
    Deserialize,
    Serialize
};
use tracing::trace;

use crate::market::marketseries::MarketSeries;
use crate::model::modelerror::ModelError;

// ─────────────────────────────────────────────────────────────────────────────
// Economic terms
// ─────────────────────────────────────────────────────────────────────────────
//
//   risk       = -alpha · exp(tau · (p[t-1] - u[t-1]))
//   momentum   =  beta  · (p[t-1] - p[t-2])
//   underlying =  gamma · (u[t]   - u[t-1])
//
// underlying reads u[t] while the other terms stop at t-1.

fn require_tick(term: &'static str, tick: usize, minimum: usize) -> Result<(), ModelError> {
    if tick < minimum {
        Err(ModelError::TickTooSmall { term, tick, minimum })
    } else {
        Ok(())
    }
}

/// Exponential penalty on the gap between derived and underlying at the prior tick.
pub fn risk(series: &MarketSeries, tick: usize, alpha: f64, tau: f64) -> Result<f64, ModelError> {
    require_tick("risk", tick, 1)?;
    let gap = series.derived_at(tick - 1)? - series.underlying_at(tick - 1)?;
    Ok(-alpha * (tau * gap).exp())
}

/// First difference of the derived series, scaled by `beta`.
pub fn momentum(series: &MarketSeries, tick: usize, beta: f64) -> Result<f64, ModelError> {
    require_tick("momentum", tick, 2)?;
    Ok(beta * (series.derived_at(tick - 1)? - series.derived_at(tick - 2)?))
}

/// First difference of the underlying series ending at `tick`, scaled by `gamma`.
pub fn underlying(series: &MarketSeries, tick: usize, gamma: f64) -> Result<f64, ModelError> {
    require_tick("underlying", tick, 1)?;
    Ok(gamma * (series.underlying_at(tick)? - series.underlying_at(tick - 1)?))
}

// ─────────────────────────────────────────────────────────────────────────────
// LocationWeights
// ─────────────────────────────────────────────────────────────────────────────

/// Weights of the three terms that make up the location parameter `q`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationWeights {
    alpha: f64,
    tau: f64,
    beta: f64,
    gamma: f64
}

impl LocationWeights {
    pub fn new(alpha: f64, tau: f64, beta: f64, gamma: f64) -> Result<LocationWeights, ModelError> {
        Ok(LocationWeights {
            alpha: ModelError::ensure_finite("alpha", alpha)?,
            tau: ModelError::ensure_finite("tau", tau)?,
            beta: ModelError::ensure_finite("beta", beta)?,
            gamma: ModelError::ensure_finite("gamma", gamma)?
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// `q = risk + momentum + underlying` at `tick`. Needs `tick >= 2`.
    pub fn location(&self, series: &MarketSeries, tick: usize) -> Result<f64, ModelError> {
        let r = risk(series, tick, self.alpha, self.tau)?;
        let m = momentum(series, tick, self.beta)?;
        let u = underlying(series, tick, self.gamma)?;
        let q = r + m + u;
        trace!(tick, risk = r, momentum = m, underlying = u, q, "location parameter");
        if q.is_finite() {
            Ok(q)
        } else {
            Err(ModelError::NonFiniteLocation(q))
        }
    }
}

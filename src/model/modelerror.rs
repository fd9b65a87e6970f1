use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str
    },

    #[error("{term} term needs tick >= {minimum}, got {tick}")]
    TickTooSmall {
        term: &'static str,
        tick: usize,
        minimum: usize
    },

    #[error("{series} series has {length} points, index {required} required")]
    SeriesTooShort {
        series: &'static str,
        required: usize,
        length: usize
    },

    #[error("location parameter is not finite ({0})")]
    NonFiniteLocation(f64),

    #[error("cannot {0} an empty curve")]
    EmptyCurve(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error)
}

impl ModelError {
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> ModelError {
        ModelError::InvalidParameter { name, value, reason }
    }

    pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ModelError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ModelError::invalid_parameter(name, value, "must be finite"))
        }
    }
}

use serde::{
    Deserialize,
    Serialize
};

/// How the sample points of a [`Domain`] are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStepping {
    /// `x` starts at `xmin` and is advanced by repeated addition of the
    /// increment while `x < xmax`. Float drift may add or drop a point.
    #[default]
    Accumulated,
    /// `x = xmin + k * increment` for `k` in `0..samples`.
    Indexed
}

/// The half-open interval `[xmin, xmax)` cut into `samples` equal increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    xmin: f64,
    xmax: f64,
    samples: usize,
    #[serde(default)]
    stepping: DomainStepping
}

impl Domain {
    pub fn new(xmin: f64, xmax: f64, samples: usize) -> Domain {
        Domain { xmin, xmax, samples, stepping: DomainStepping::Accumulated }
    }

    pub fn with_stepping(mut self, stepping: DomainStepping) -> Domain {
        self.stepping = stepping;
        self
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn stepping(&self) -> DomainStepping {
        self.stepping
    }

    pub fn increments(&self) -> f64 {
        (self.xmax - self.xmin) / self.samples as f64
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
            || !self.xmin.is_finite()
            || !self.xmax.is_finite()
            || self.xmin >= self.xmax
    }

    pub fn iter(&self) -> DomainIter {
        DomainIter {
            domain: *self,
            next_x: self.xmin,
            index: 0,
            exhausted: self.is_empty()
        }
    }
}

impl IntoIterator for &Domain {
    type Item = f64;
    type IntoIter = DomainIter;

    fn into_iter(self) -> DomainIter {
        self.iter()
    }
}

pub struct DomainIter {
    domain: Domain,
    next_x: f64,
    index: usize,
    exhausted: bool
}

impl Iterator for DomainIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.exhausted {
            return None;
        }
        let increments = self.domain.increments();
        match self.domain.stepping {
            DomainStepping::Accumulated => {
                let x = self.next_x;
                if x >= self.domain.xmax {
                    self.exhausted = true;
                    return None;
                }
                let advanced = x + increments;
                // an increment lost to rounding would never reach xmax
                if advanced <= x {
                    self.exhausted = true;
                }
                self.next_x = advanced;
                Some(x)
            },
            DomainStepping::Indexed => {
                if self.index >= self.domain.samples {
                    self.exhausted = true;
                    return None;
                }
                let x = self.domain.xmin + self.index as f64 * increments;
                self.index += 1;
                Some(x)
            }
        }
    }
}

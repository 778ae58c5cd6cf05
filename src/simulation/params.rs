//! Run parameters for a simulation
//!
//! `RunParameters` holds the total duration, the fixed step size and the
//! optional escape radius (`limit`).

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParameters {
    pub duration: f64, // total simulated time
    pub dt: f64, // fixed step size
    pub limit: Option<f64>, // escape radius, |x| > limit freezes recording
}

impl RunParameters {
    pub fn new(duration: f64, dt: f64, limit: Option<f64>) -> Self {
        Self { duration, dt, limit }
    }

    /// floor(duration / dt), zero for negative or non-finite ratios
    pub fn num_steps(&self) -> usize {
        let ratio = (self.duration / self.dt).floor();
        if ratio.is_finite() && ratio > 0.0 {
            ratio as usize
        } else {
            0
        }
    }

    /// Strict-mode checks; the permissive path never calls this
    pub fn validate(&self) -> SimResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "dt",
                reason: format!("must be finite and > 0, got {}", self.dt),
            });
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "duration",
                reason: format!("must be finite and >= 0, got {}", self.duration),
            });
        }
        if let Some(limit) = self.limit {
            if !limit.is_finite() || limit < 0.0 {
                return Err(SimError::InvalidParameter {
                    name: "limit",
                    reason: format!("must be finite and >= 0, got {limit}"),
                });
            }
        }
        Ok(())
    }
}

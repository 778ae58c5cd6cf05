//! Field-line tracing
//!
//! Walks a massless point along the unit field direction `B / |B|` in fixed
//! steps, forward (+B), backward (-B) or both, stopping a direction as soon as
//! a step would leave the axis-aligned box `|x|, |y|, |z| <= boundary_limit`.
//!
//! The returned path is in traversal order: backward points (farthest first),
//! then the start, then forward points.

use std::collections::VecDeque;
use std::convert::Infallible;

use log::debug;
use serde::Deserialize;

use crate::error::{SimError, SimResult};
use super::field::MagneticField;
use super::integrator::{rk4_first_order, Direction};
use super::states::NVec3;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceDirection {
    #[default]
    #[serde(rename = "forward")]
    Forward,
    #[serde(rename = "backward")]
    Backward,
    #[serde(rename = "both")]
    Both,
}

impl TraceDirection {
    /// Passes to run, forward first
    fn passes(self) -> &'static [Direction] {
        match self {
            TraceDirection::Forward => &[Direction::Forward],
            TraceDirection::Backward => &[Direction::Backward],
            TraceDirection::Both => &[Direction::Forward, Direction::Backward],
        }
    }
}

/// How each step is taken along the field direction
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceScheme {
    /// x += sign * step_size * B/|B|
    #[default]
    #[serde(rename = "euler")]
    Euler,
    /// RK4 on dx/ds = sign * B/|B|
    #[serde(rename = "rk4")]
    Rk4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLineTracer {
    pub steps: usize, // max steps per direction
    pub step_size: f64, // arc length per step
    pub direction: TraceDirection,
    pub boundary_limit: f64, // half-width of the bounding box
    pub scheme: TraceScheme,
}

impl Default for FieldLineTracer {
    fn default() -> Self {
        Self {
            steps: 1000,
            step_size: 0.1,
            direction: TraceDirection::Forward,
            boundary_limit: 10.0,
            scheme: TraceScheme::Euler,
        }
    }
}

impl FieldLineTracer {
    pub fn with_direction(mut self, direction: TraceDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_steps(mut self, steps: usize, step_size: f64) -> Self {
        self.steps = steps;
        self.step_size = step_size;
        self
    }

    pub fn with_boundary_limit(mut self, boundary_limit: f64) -> Self {
        self.boundary_limit = boundary_limit;
        self
    }

    pub fn with_scheme(mut self, scheme: TraceScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Trace the field line through `start`.
    ///
    /// A zero field is normalized without a guard, so the path fills with
    /// NaN until the step budget runs out; use `trace_checked` to reject it.
    pub fn trace<F>(&self, field: &F, start: NVec3) -> Vec<NVec3>
    where
        F: MagneticField + ?Sized,
    {
        let unit = |x: NVec3| {
            let b = field.field(x);
            Ok::<NVec3, Infallible>(b / b.norm())
        };
        match self.walk(start, unit) {
            Ok(path) => path,
            Err(never) => match never {},
        }
    }

    /// Like `trace`, but errors on a zero or non-finite field sample
    pub fn trace_checked<F>(&self, field: &F, start: NVec3) -> SimResult<Vec<NVec3>>
    where
        F: MagneticField + ?Sized,
    {
        let unit = |x: NVec3| {
            let b = field.field(x);
            let magnitude = b.norm();
            if magnitude == 0.0 || !magnitude.is_finite() {
                return Err(SimError::DegenerateField { x: x.x, y: x.y, z: x.z, magnitude });
            }
            Ok(b / magnitude)
        };
        self.walk(start, unit)
    }

    fn walk<U, E>(&self, start: NVec3, unit: U) -> Result<Vec<NVec3>, E>
    where
        U: Fn(NVec3) -> Result<NVec3, E>,
    {
        let mut path = VecDeque::new();
        path.push_back(start);

        for &pass in self.direction.passes() {
            let sign = match pass {
                Direction::Forward => 1.0,
                Direction::Backward => -1.0,
            };
            let mut r = start;
            let mut taken = 0;

            for _ in 0..self.steps {
                r = match self.scheme {
                    TraceScheme::Euler => r + sign * unit(r)? * self.step_size,
                    TraceScheme::Rk4 => {
                        // rk4_first_order can't short-circuit, so capture the first failure
                        let mut failure = None;
                        let next = rk4_first_order(0.0, r, |_, x| match unit(x) {
                            Ok(u) => u,
                            Err(e) => {
                                if failure.is_none() {
                                    failure = Some(e);
                                }
                                NVec3::repeat(f64::NAN)
                            }
                        }, self.step_size, pass);
                        if let Some(e) = failure {
                            return Err(e);
                        }
                        next
                    }
                };

                if self.out_of_bounds(&r) {
                    break;
                }

                match pass {
                    Direction::Forward => path.push_back(r),
                    Direction::Backward => path.push_front(r),
                }
                taken += 1;
            }
            debug!("field line {:?}: {} steps from {:?}", pass, taken, start.as_slice());
        }

        Ok(path.into())
    }

    fn out_of_bounds(&self, r: &NVec3) -> bool {
        r.iter().any(|c| c.abs() > self.boundary_limit)
    }
}

//! Time-stepping driver for a collection of charged bodies
//!
//! `Simulation` owns its own copy of the bodies and the field. Each `run`
//! records every active body into NaN-filled `(step, axis, body)` arrays, then
//! advances all bodies by one RK4 step. Recording is gated by `BodyStatus`;
//! integration is not, so an escaped body keeps evolving unrecorded.
//!
//! Body state is carried over between runs: a second `run` continues from
//! where the first one stopped.

use log::{debug, info, warn};
use ndarray::Array3;
use rayon::prelude::*;

use crate::error::SimResult;
use super::engine::Engine;
use super::field::MagneticField;
use super::integrator::rk4_body;
use super::params::RunParameters;
use super::states::{Body, BodyStatus, NVec3};

/// Recorded output of one `run`
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub positions: Array3<f64>, // (num_steps, 3, num_bodies)
    pub velocities: Array3<f64>, // (num_steps, 3, num_bodies)
}

impl Trajectory {
    fn nan_filled(num_steps: usize, num_bodies: usize) -> Self {
        Self {
            positions: Array3::from_elem((num_steps, 3, num_bodies), f64::NAN),
            velocities: Array3::from_elem((num_steps, 3, num_bodies), f64::NAN),
        }
    }

    fn record(&mut self, step: usize, index: usize, body: &Body) {
        for axis in 0..3 {
            self.positions[[step, axis, index]] = body.position[axis];
            self.velocities[[step, axis, index]] = body.velocity[axis];
        }
    }

    pub fn num_steps(&self) -> usize {
        self.positions.shape()[0]
    }

    pub fn num_bodies(&self) -> usize {
        self.positions.shape()[2]
    }

    /// Recorded position, `None` when out of range or not recorded
    pub fn position_at(&self, step: usize, body: usize) -> Option<NVec3> {
        read_vec(&self.positions, step, body)
    }

    /// Recorded velocity, `None` when out of range or not recorded
    pub fn velocity_at(&self, step: usize, body: usize) -> Option<NVec3> {
        read_vec(&self.velocities, step, body)
    }

    /// Index of the last row holding data for `body`
    pub fn last_recorded_step(&self, body: usize) -> Option<usize> {
        (0..self.num_steps())
            .rev()
            .find(|&step| self.position_at(step, body).is_some())
    }
}

fn read_vec(arr: &Array3<f64>, step: usize, body: usize) -> Option<NVec3> {
    let shape = arr.shape();
    if step >= shape[0] || body >= shape[2] {
        return None;
    }
    let v = NVec3::new(arr[[step, 0, body]], arr[[step, 1, body]], arr[[step, 2, body]]);
    if v.iter().any(|c| c.is_nan()) {
        None
    } else {
        Some(v)
    }
}

pub struct Simulation<F> {
    bodies: Vec<Body>,
    statuses: Vec<BodyStatus>,
    field: F,
    engine: Engine,
    trajectory: Option<Trajectory>,
}

impl<F> Simulation<F>
where
    F: MagneticField + Sync,
{
    /// Copies `bodies`; the caller's values are never touched
    pub fn new(bodies: &[Body], field: F) -> Self {
        Self::with_engine(bodies, field, Engine::default())
    }

    pub fn with_engine(bodies: &[Body], field: F, engine: Engine) -> Self {
        Self {
            bodies: bodies.to_vec(),
            statuses: vec![BodyStatus::Active; bodies.len()],
            field,
            engine,
            trajectory: None,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn statuses(&self) -> &[BodyStatus] {
        &self.statuses
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Result of the most recent run
    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    pub fn run_complete(&self) -> bool {
        self.trajectory.is_some()
    }

    /// Step count of the most recent run, 0 before any run
    pub fn num_steps(&self) -> usize {
        self.trajectory.as_ref().map_or(0, Trajectory::num_steps)
    }

    /// Permissive run: degenerate `dt`/`duration` give an empty trajectory
    pub fn run(&mut self, duration: f64, dt: f64, limit: Option<f64>) -> &Trajectory {
        self.run_with_progress(duration, dt, limit, |_| {})
    }

    /// Like `run`, calling `progress` with percent complete before each step advance
    pub fn run_with_progress<P>(&mut self, duration: f64, dt: f64, limit: Option<f64>, progress: P) -> &Trajectory
    where
        P: FnMut(f64),
    {
        self.execute(RunParameters::new(duration, dt, limit), progress)
    }

    /// Strict run: rejects non-positive `dt` and non-finite inputs
    pub fn run_checked(&mut self, duration: f64, dt: f64, limit: Option<f64>) -> SimResult<&Trajectory> {
        let params = RunParameters::new(duration, dt, limit);
        params.validate()?;
        Ok(self.execute(params, |_| {}))
    }

    /// Run with the validation mode chosen by `Engine::strict`
    pub fn run_params(&mut self, params: &RunParameters) -> SimResult<&Trajectory> {
        if self.engine.strict {
            params.validate()?;
        }
        Ok(self.execute(*params, |_| {}))
    }

    /// Advance every body by one RK4 step, regardless of status
    pub fn advance(&mut self, dt: f64) {
        let field = &self.field;
        if self.engine.parallel {
            self.bodies.par_iter_mut().for_each(|body| rk4_body(body, field, dt));
        } else {
            for body in self.bodies.iter_mut() {
                rk4_body(body, field, dt);
            }
        }
    }

    fn execute<P>(&mut self, params: RunParameters, mut progress: P) -> &Trajectory
    where
        P: FnMut(f64),
    {
        let num_steps = params.num_steps();
        let n = self.bodies.len();
        if num_steps == 0 {
            warn!("run: duration {} with dt {} gives no steps", params.duration, params.dt);
        }
        info!("run: {} bodies, {} steps of dt = {}", n, num_steps, params.dt);

        let mut out = Trajectory::nan_filled(num_steps, n);
        let mut next_report = 10.0;

        for step in 0..num_steps {
            for (i, (body, status)) in self.bodies.iter().zip(self.statuses.iter_mut()).enumerate() {
                if !status.is_active() {
                    continue;
                }
                out.record(step, i, body);

                // Recorded first, frozen from the next step on
                if let Some(limit) = params.limit {
                    if body.position.norm() > limit {
                        *status = BodyStatus::Escaped { at_step: step };
                        debug!("body {i} escaped |x| > {limit} at step {step}");
                    }
                }
            }

            let pct = step as f64 / num_steps as f64 * 100.0;
            progress(pct);
            if pct >= next_report {
                debug!("run: {pct:.2}%");
                next_report += 10.0;
            }

            self.advance(params.dt);
        }

        let escaped = self.statuses.iter().filter(|s| !s.is_active()).count();
        info!("run complete: {num_steps} steps, {escaped}/{n} bodies escaped");

        self.trajectory.insert(out)
    }
}

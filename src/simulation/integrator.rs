//! Fixed-step Runge–Kutta integrators
//!
//! - `rk4_step` / `rk4_body`: classical RK4 for the coupled system
//!   dx/dt = v, dv/dt = (q/m) (v x B(x))
//! - `rk4_first_order`: RK4 for a generic first-order ODE dx/dt = f(t, x),
//!   runnable forward or backward in `t`

use serde::Deserialize;

use super::field::MagneticField;
use super::forces::lorentz_acceleration;
use super::states::{Body, NVec3};

/// Advance `(x, v)` by one RK4 step of size `dt`.
///
/// Each stage samples the field at its intermediate position and evaluates the
/// acceleration with that stage's intermediate velocity. Non-finite field
/// values propagate into the result unchecked.
pub fn rk4_step<F>(x: NVec3, v: NVec3, q_m: f64, field: &F, dt: f64) -> (NVec3, NVec3)
where
    F: MagneticField + ?Sized,
{
    // Stage 1: slope at the start of the interval
    let b1 = field.field(x);
    let k1x = dt * v;
    let k1v = dt * lorentz_acceleration(&v, q_m, &b1);

    // Stage 2: midpoint using the stage-1 slopes
    let v2 = v + 0.5 * k1v;
    let b2 = field.field(x + 0.5 * k1x);
    let k2x = dt * v2;
    let k2v = dt * lorentz_acceleration(&v2, q_m, &b2);

    // Stage 3: midpoint using the stage-2 slopes
    let v3 = v + 0.5 * k2v;
    let b3 = field.field(x + 0.5 * k2x);
    let k3x = dt * v3;
    let k3v = dt * lorentz_acceleration(&v3, q_m, &b3);

    // Stage 4: end of the interval using the stage-3 slopes
    let v4 = v + k3v;
    let b4 = field.field(x + k3x);
    let k4x = dt * v4;
    let k4v = dt * lorentz_acceleration(&v4, q_m, &b4);

    let x_new = x + (k1x + 2.0 * k2x + 2.0 * k3x + k4x) / 6.0;
    let v_new = v + (k1v + 2.0 * k2v + 2.0 * k3v + k4v) / 6.0;
    (x_new, v_new)
}

/// Advance a single body in place by one RK4 step
pub fn rk4_body<F>(body: &mut Body, field: &F, dt: f64)
where
    F: MagneticField + ?Sized,
{
    let (x, v) = rk4_step(body.position, body.velocity, body.charge_to_mass(), field, dt);
    body.position = x;
    body.velocity = v;
}

/// Direction of travel in the independent variable
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    #[serde(rename = "forward")]
    Forward,
    #[serde(rename = "backward")]
    Backward,
}

/// One RK4 step of dx/dt = f(t, x) with step `h`.
///
/// Backward steps negate `h`; the stage times then run `t`, `t - h/2`,
/// `t - h/2`, `t` (the last stage is evaluated at the start time, not `t - h`).
pub fn rk4_first_order<G>(t: f64, x: NVec3, mut f: G, h: f64, direction: Direction) -> NVec3
where
    G: FnMut(f64, NVec3) -> NVec3,
{
    match direction {
        Direction::Forward => {
            let k1 = h * f(t, x);
            let k2 = h * f(t + h / 2.0, x + k1 / 2.0);
            let k3 = h * f(t + h / 2.0, x + k2 / 2.0);
            let k4 = h * f(t + h, x + k3);
            x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
        }
        Direction::Backward => {
            let k1 = -h * f(t, x);
            let k2 = -h * f(t - h / 2.0, x + k1 / 2.0);
            let k3 = -h * f(t - h / 2.0, x + k2 / 2.0);
            let k4 = -h * f(t, x + k3);
            x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
        }
    }
}

//! Core state types for the charged-particle simulation.
//!
//! - `Body`: one charged point particle, with fixed mass/charge and evolving
//!   position/velocity (`NVec3`)
//! - `BodyStatus`: whether a body's trajectory is still being recorded

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

/// A charged point particle.
///
/// `mass`, `charge` and the derived `charge_to_mass` are fixed at construction
/// and only readable afterwards, so the ratio can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: f64,
    charge: f64,
    charge_to_mass: f64,
    pub position: NVec3,
    pub velocity: NVec3,
}

impl Body {
    /// Build a body from raw slices, failing unless both are exactly 3 long
    pub fn new(mass: f64, charge: f64, position: &[f64], velocity: &[f64]) -> SimResult<Self> {
        let position = to_nvec3("position", position)?;
        let velocity = to_nvec3("velocity", velocity)?;
        Ok(Self::from_vectors(mass, charge, position, velocity))
    }

    pub fn from_vectors(mass: f64, charge: f64, position: NVec3, velocity: NVec3) -> Self {
        Self {
            mass,
            charge,
            charge_to_mass: charge / mass,
            position,
            velocity,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// q/m, computed once in the constructor
    pub fn charge_to_mass(&self) -> f64 {
        self.charge_to_mass
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Non-relativistic kinetic energy 0.5 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

fn to_nvec3(field: &'static str, components: &[f64]) -> SimResult<NVec3> {
    match components {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::Dimension { field, len: components.len() }),
    }
}

/// Recording status of a body within a `Simulation`.
///
/// Only recording keys off this; every body is integrated regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyStatus {
    #[default]
    Active,
    /// Left the `limit` sphere; `at_step` is the last recorded step of the run
    /// in which it escaped
    Escaped { at_step: usize },
}

impl BodyStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, BodyStatus::Active)
    }
}

//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]    – execution options (parallel update, strict validation)
//! - [`RunConfig`]       – duration, step size and escape radius
//! - [`FieldConfig`]     – the magnetic field the bodies move through
//! - [`BodyConfig`]      – initial state for each body
//! - [`FieldLineConfig`] – optional field lines to trace through the same field
//! - [`ScenarioConfig`]  – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   parallel: false
//!   strict: false
//!
//! run:
//!   duration: 6.283185307179586
//!   dt: 0.001
//!   limit: 50.0              # optional
//!
//! field:
//!   type: uniform            # or: dipole (moment, center), zero
//!   b: [0.0, 0.0, 1.0]
//!
//! bodies:
//!   - mass: 1.0
//!     charge: 1.0
//!     position: [1.0, 0.0, 0.0]
//!     velocity: [0.0, -1.0, 0.0]
//!
//! field_lines:               # optional
//!   seeds:
//!     - [0.0, 0.0, 0.0]
//!   steps: 100
//!   step_size: 0.1
//!   direction: both
//!   boundary_limit: 10.0
//!   scheme: euler
//! ```
//!
//! Positions and velocities are plain sequences here; their dimension is
//! checked when the scenario is built.

use serde::Deserialize;

use crate::simulation::field_lines::{TraceDirection, TraceScheme};

#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub parallel: bool, // run the per-body update on the rayon pool
    #[serde(default)]
    pub strict: bool, // reject degenerate run parameters instead of producing empty output
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RunConfig {
    pub duration: f64, // total simulated time
    pub dt: f64, // fixed step size
    #[serde(default)]
    pub limit: Option<f64>, // escape radius
}

/// Magnetic field selection
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(tag = "type")]
pub enum FieldConfig {
    #[serde(rename = "zero")]
    Zero,

    #[serde(rename = "uniform")]
    Uniform { b: [f64; 3] },

    #[serde(rename = "dipole")]
    Dipole {
        moment: [f64; 3],
        #[serde(default)]
        center: [f64; 3],
    },
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub mass: f64,
    pub charge: f64,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
}

fn default_steps() -> usize {
    1000
}

fn default_step_size() -> f64 {
    0.1
}

fn default_boundary_limit() -> f64 {
    10.0
}

/// Field lines to trace after the run
#[derive(Deserialize, Debug, Clone)]
pub struct FieldLineConfig {
    pub seeds: Vec<[f64; 3]>,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    #[serde(default)]
    pub direction: TraceDirection,
    #[serde(default = "default_boundary_limit")]
    pub boundary_limit: f64,
    #[serde(default)]
    pub scheme: TraceScheme,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub run: RunConfig,
    pub field: FieldConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub field_lines: Option<FieldLineConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_scenario_with_defaults() {
        let yaml = "
run: { duration: 1.0, dt: 0.1 }
field: { type: zero }
bodies:
  - { mass: 1.0, charge: 0.0, position: [0, 0, 0], velocity: [1, 0, 0] }
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!cfg.engine.parallel);
        assert!(!cfg.engine.strict);
        assert_eq!(cfg.run.limit, None);
        assert!(matches!(cfg.field, FieldConfig::Zero));
        assert_eq!(cfg.bodies.len(), 1);
        assert!(cfg.field_lines.is_none());
    }

    #[test]
    fn field_line_defaults_match_tracer_defaults() {
        let yaml = "
run: { duration: 1.0, dt: 0.1 }
field: { type: dipole, moment: [0, 0, 1] }
bodies: []
field_lines:
  seeds: [[1, 0, 0]]
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        match cfg.field {
            FieldConfig::Dipole { moment, center } => {
                assert_eq!(moment, [0.0, 0.0, 1.0]);
                assert_eq!(center, [0.0, 0.0, 0.0]);
            }
            other => panic!("expected dipole, got {other:?}"),
        }
        let fl = cfg.field_lines.unwrap();
        assert_eq!(fl.steps, 1000);
        assert_eq!(fl.step_size, 0.1);
        assert_eq!(fl.direction, TraceDirection::Forward);
        assert_eq!(fl.boundary_limit, 10.0);
        assert_eq!(fl.scheme, TraceScheme::Euler);
    }

    #[test]
    fn unknown_field_type_is_rejected() {
        let yaml = "
run: { duration: 1.0, dt: 0.1 }
field: { type: toroidal }
bodies: []
";
        assert!(serde_yaml::from_str::<ScenarioConfig>(yaml).is_err());
    }
}

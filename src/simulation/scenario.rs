//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` holding:
//! - the `Simulation` with its bodies and field
//! - the run parameters (`RunParameters`)
//! - the field-line tracer and its seed points, if configured

use std::fs;
use std::path::Path;

use log::info;

use crate::configuration::config::{BodyConfig, FieldConfig, FieldLineConfig, ScenarioConfig};
use crate::error::SimResult;
use super::driver::{Simulation, Trajectory};
use super::engine::Engine;
use super::field::{DipoleField, FieldModel, UniformField, ZeroField};
use super::field_lines::FieldLineTracer;
use super::params::RunParameters;
use super::states::{Body, NVec3};

/// Field-line tracer plus the points to trace from
#[derive(Debug, Clone)]
pub struct FieldLineJob {
    pub tracer: FieldLineTracer,
    pub seeds: Vec<NVec3>,
}

/// Runtime bundle constructed from a [`ScenarioConfig`]
pub struct Scenario {
    pub simulation: Simulation<FieldModel>,
    pub parameters: RunParameters,
    pub field_lines: Option<FieldLineJob>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body`, checking dimensions
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body::new(bc.mass, bc.charge, &bc.position, &bc.velocity))
            .collect::<SimResult<Vec<Body>>>()?;

        let field = build_field(&cfg.field);

        let engine = Engine {
            parallel: cfg.engine.parallel,
            strict: cfg.engine.strict,
        };

        let parameters = RunParameters::new(cfg.run.duration, cfg.run.dt, cfg.run.limit);

        let field_lines = cfg.field_lines.as_ref().map(build_field_lines);

        info!(
            "scenario: {} bodies, field {:?}, {} field-line seeds",
            bodies.len(),
            field,
            field_lines.as_ref().map_or(0, |job| job.seeds.len())
        );

        Ok(Self {
            simulation: Simulation::with_engine(&bodies, field, engine),
            parameters,
            field_lines,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> SimResult<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml)?;
        Self::build_scenario(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Run the simulation with the configured parameters
    pub fn run(&mut self) -> SimResult<&Trajectory> {
        self.simulation.run_params(&self.parameters)
    }

    /// Trace every configured seed through the scenario's field
    pub fn trace_field_lines(&self) -> SimResult<Vec<Vec<NVec3>>> {
        let Some(job) = &self.field_lines else {
            return Ok(Vec::new());
        };
        let field = self.simulation.field();
        job.seeds
            .iter()
            .map(|&seed| {
                if self.simulation.engine().strict {
                    job.tracer.trace_checked(field, seed)
                } else {
                    Ok(job.tracer.trace(field, seed))
                }
            })
            .collect()
    }
}

fn build_field(cfg: &FieldConfig) -> FieldModel {
    match *cfg {
        FieldConfig::Zero => FieldModel::Zero(ZeroField),
        FieldConfig::Uniform { b } => FieldModel::Uniform(UniformField { b: NVec3::from(b) }),
        FieldConfig::Dipole { moment, center } => FieldModel::Dipole(DipoleField {
            moment: NVec3::from(moment),
            center: NVec3::from(center),
        }),
    }
}

fn build_field_lines(cfg: &FieldLineConfig) -> FieldLineJob {
    let tracer = FieldLineTracer {
        steps: cfg.steps,
        step_size: cfg.step_size,
        direction: cfg.direction,
        boundary_limit: cfg.boundary_limit,
        scheme: cfg.scheme,
    };
    let seeds = cfg.seeds.iter().map(|&s| NVec3::from(s)).collect();
    FieldLineJob { tracer, seeds }
}

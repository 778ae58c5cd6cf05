pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodyStatus, NVec3};
pub use simulation::field::{MagneticField, FieldModel, UniformField, DipoleField, ZeroField, MU0};
pub use simulation::forces::lorentz_acceleration;
pub use simulation::integrator::{rk4_step, rk4_body, rk4_first_order, Direction};
pub use simulation::params::RunParameters;
pub use simulation::engine::Engine;
pub use simulation::driver::{Simulation, Trajectory};
pub use simulation::field_lines::{FieldLineTracer, TraceDirection, TraceScheme};
pub use simulation::scenario::{Scenario, FieldLineJob};

pub use configuration::config::{EngineConfig, RunConfig, FieldConfig, BodyConfig, FieldLineConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_rk4, bench_field_lines};

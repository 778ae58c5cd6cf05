pub mod states;
pub mod params;
pub mod engine;
pub mod field;
pub mod forces;
pub mod integrator;
pub mod driver;
pub mod field_lines;
pub mod scenario;

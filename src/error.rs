//! Error types for the simulator
//!
//! The numeric core is permissive and never fails on its own; errors come from
//! body construction, strict-mode parameter checks, and scenario loading.

use thiserror::Error;

/// Result alias used across the crate
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// A body's position or velocity was not a 3-vector
    #[error("{field} must be three-dimensional, got {len} components")]
    Dimension { field: &'static str, len: usize },

    /// Rejected by strict validation
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Field vector with zero or non-finite magnitude where a direction is needed
    #[error("field magnitude {magnitude} at [{x}, {y}, {z}] cannot be normalized")]
    DegenerateField { x: f64, y: f64, z: f64, magnitude: f64 },

    #[error("scenario parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

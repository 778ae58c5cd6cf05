//! High-level runtime engine settings
//!
//! Selects whether the per-body update runs on the rayon pool and whether
//! run parameters are validated before stepping.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    pub parallel: bool, // false = serial per-body loop, true = rayon
    pub strict: bool, // false = degenerate input yields empty/NaN output, true = error
}

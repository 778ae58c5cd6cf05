//! Lorentz acceleration for a charged body in a magnetic field

use super::states::NVec3;

/// a = (q/m) (v x B)
///
/// Evaluated four times per body per RK4 step; stays on the stack.
#[inline]
pub fn lorentz_acceleration(velocity: &NVec3, charge_to_mass: f64, b: &NVec3) -> NVec3 {
    charge_to_mass * velocity.cross(b)
}

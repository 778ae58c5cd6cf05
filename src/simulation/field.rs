//! Magnetic field sources sampled by the integrator and the field-line tracer
//!
//! Anything implementing [`MagneticField`] can drive a simulation. Plain
//! closures `Fn(NVec3) -> NVec3` qualify through a blanket impl; the structs
//! below cover the fields used by the bundled scenarios.

use std::f64::consts::PI;

use super::states::NVec3;

/// Vacuum permeability (T m / A)
pub const MU0: f64 = 4.0 * PI * 1e-7;

/// Distances below this are clamped when evaluating the dipole at its centre
const DIPOLE_MIN_RADIUS: f64 = 1e-9;

/// A deterministic field `B(x)`
pub trait MagneticField {
    fn field(&self, position: NVec3) -> NVec3;
}

impl<F> MagneticField for F
where
    F: Fn(NVec3) -> NVec3,
{
    fn field(&self, position: NVec3) -> NVec3 {
        self(position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZeroField;

impl MagneticField for ZeroField {
    fn field(&self, _position: NVec3) -> NVec3 {
        NVec3::zeros()
    }
}

/// Same vector everywhere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformField {
    pub b: NVec3,
}

impl MagneticField for UniformField {
    fn field(&self, _position: NVec3) -> NVec3 {
        self.b
    }
}

/// Point magnetic dipole with moment `moment` (A m^2) located at `center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipoleField {
    pub moment: NVec3,
    pub center: NVec3,
}

impl DipoleField {
    pub fn at_origin(moment: NVec3) -> Self {
        Self { moment, center: NVec3::zeros() }
    }
}

impl MagneticField for DipoleField {
    /// B = mu0/(4 pi) * (3 (m.r) r / |r|^5 - m / |r|^3)
    fn field(&self, position: NVec3) -> NVec3 {
        let r = position - self.center;
        let mut r_norm = r.norm();
        if r_norm == 0.0 {
            r_norm = DIPOLE_MIN_RADIUS;
        }

        let cte = MU0 / (4.0 * PI);
        let m_dot_r = self.moment.dot(&r);

        let fact1 = 3.0 * m_dot_r * r / r_norm.powi(5);
        let fact2 = self.moment / r_norm.powi(3);

        cte * (fact1 - fact2)
    }
}

/// Runtime field selected by a scenario file
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldModel {
    Zero(ZeroField),
    Uniform(UniformField),
    Dipole(DipoleField),
}

impl MagneticField for FieldModel {
    fn field(&self, position: NVec3) -> NVec3 {
        match self {
            FieldModel::Zero(f) => f.field(position),
            FieldModel::Uniform(f) => f.field(position),
            FieldModel::Dipole(f) => f.field(position),
        }
    }
}

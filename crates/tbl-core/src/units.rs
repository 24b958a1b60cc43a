// tbl-core/src/units.rs

use uom::si::f64::{
    DiffusionCoefficient as UomDiffusionCoefficient, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, MassDensity as UomMassDensity, Pressure as UomPressure,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
/// Kinematic viscosity shares the m²/s dimension of a diffusion coefficient.
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

pub mod constants {
    use super::*;

    /// Dynamic viscosity of air used by the default fluid (Pa·s).
    pub const AIR_MU_PA_S: f64 = 1.7894e-5;
    /// Density of air used by the default fluid (kg/m³).
    pub const AIR_RHO_KG_M3: f64 = 1.225;

    #[inline]
    pub fn air_mu() -> DynVisc {
        pa_s(AIR_MU_PA_S)
    }

    #[inline]
    pub fn air_rho() -> Density {
        kg_per_m3(AIR_RHO_KG_M3)
    }
}

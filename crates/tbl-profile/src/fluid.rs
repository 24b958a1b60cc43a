//! Fluid properties and wall-model constants.
//!
//! Both are plain values handed to each profile at construction, so a test or a
//! batch run can use a different working fluid without touching global state.

use crate::error::{ProfileError, ProfileResult};
use tbl_core::units::{DynVisc, Density, KinVisc, constants};

/// Dynamic viscosity and density of the working fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    mu: DynVisc,
    rho: Density,
}

impl FluidProperties {
    /// Create fluid properties; both values must be finite and positive.
    pub fn new(mu: DynVisc, rho: Density) -> ProfileResult<Self> {
        if !(mu.value.is_finite() && mu.value > 0.0) {
            return Err(ProfileError::InvalidInput {
                what: "dynamic viscosity must be positive",
            });
        }
        if !(rho.value.is_finite() && rho.value > 0.0) {
            return Err(ProfileError::InvalidInput {
                what: "density must be positive",
            });
        }
        Ok(Self { mu, rho })
    }

    /// Air at the reference conditions (μ = 1.7894e-5 Pa·s, ρ = 1.225 kg/m³).
    pub fn air() -> Self {
        Self {
            mu: constants::air_mu(),
            rho: constants::air_rho(),
        }
    }

    pub fn mu(&self) -> DynVisc {
        self.mu
    }

    pub fn rho(&self) -> Density {
        self.rho
    }

    /// Kinematic viscosity ν = μ/ρ.
    pub fn nu(&self) -> KinVisc {
        self.mu / self.rho
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::air()
    }
}

/// Constants of the log-law overlay `u+ = ln(y+)/κ + B`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallModelConstants {
    /// von Kármán constant κ
    pub kappa: f64,
    /// Log-law intercept B
    pub intercept: f64,
}

impl WallModelConstants {
    pub fn new(kappa: f64, intercept: f64) -> ProfileResult<Self> {
        if !(kappa.is_finite() && kappa > 0.0) {
            return Err(ProfileError::InvalidInput {
                what: "von Karman constant must be positive",
            });
        }
        if !intercept.is_finite() {
            return Err(ProfileError::InvalidInput {
                what: "log-law intercept must be finite",
            });
        }
        Ok(Self { kappa, intercept })
    }
}

impl Default for WallModelConstants {
    fn default() -> Self {
        Self {
            kappa: 0.41,
            intercept: 5.2,
        }
    }
}

/// Everything a profile needs besides its samples and wall conditions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileConfig {
    pub fluid: FluidProperties,
    pub wall_model: WallModelConstants,
}

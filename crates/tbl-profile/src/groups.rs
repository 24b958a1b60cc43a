//! Dimensionless groups: Reynolds numbers and pressure-gradient parameters.
//!
//! All of these are compositions of the cached u_e, δ, δ*, θ and the friction
//! velocity, so the same δ* feeds both Re_δ* and β for a given profile.

use crate::error::ProfileResult;
use crate::profile::BoundaryLayerProfile;
use tbl_core::{checked_div, ensure_finite, ensure_nonzero};

impl BoundaryLayerProfile {
    /// Station Reynolds number Re_x = u_e·x/ν.
    pub fn reynolds_x(&self) -> ProfileResult<f64> {
        Ok(ensure_finite(
            self.u_e * self.conditions.x.value / self.nu(),
            "station Reynolds number",
        )?)
    }

    /// Friction Reynolds number Re_τ = δ·u_τ/ν.
    pub fn friction_reynolds(&self) -> ProfileResult<f64> {
        let u_tau = self.friction_velocity()?;
        Ok(ensure_finite(
            self.boundary_thickness() * u_tau / self.nu(),
            "friction Reynolds number",
        )?)
    }

    /// Momentum-thickness Reynolds number Re_θ = θ·u_e/ν.
    pub fn momentum_thickness_reynolds(&self) -> ProfileResult<f64> {
        Ok(ensure_finite(
            self.theta * self.u_e / self.nu(),
            "momentum-thickness Reynolds number",
        )?)
    }

    /// Displacement-thickness Reynolds number Re_δ* = δ*·u_e/ν.
    pub fn displacement_thickness_reynolds(&self) -> ProfileResult<f64> {
        Ok(ensure_finite(
            self.delta_star * self.u_e / self.nu(),
            "displacement-thickness Reynolds number",
        )?)
    }

    /// Clauser's pressure-gradient parameter β = (dP/dx)·δ*/τ.
    pub fn clauser_beta(&self) -> ProfileResult<f64> {
        Ok(checked_div(
            self.conditions.dpdx * self.delta_star,
            self.conditions.tau.value,
            "wall shear stress",
        )?)
    }

    /// Mellor's pressure-gradient parameter p+ = (dP/dx)·ν/u_τ³.
    pub fn mellor_p_plus(&self) -> ProfileResult<f64> {
        let u_tau = self.friction_velocity_nonzero()?;
        Ok(ensure_finite(
            self.conditions.dpdx * self.nu() / u_tau.powi(3),
            "Mellor pressure-gradient parameter",
        )?)
    }

    /// Launder's acceleration parameter K = −ν·(dP/dx)/(ρ·u_e³).
    pub fn launder_k(&self) -> ProfileResult<f64> {
        let u_e = ensure_nonzero(self.u_e, "free-stream velocity")?;
        Ok(ensure_finite(
            -self.nu() * self.conditions.dpdx / (self.rho() * u_e.powi(3)),
            "Launder acceleration parameter",
        )?)
    }
}

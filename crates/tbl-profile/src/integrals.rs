//! Integral thickness engine.
//!
//! Every integral runs over the samples from the wall up to and including the
//! edge index, never the free stream beyond it.

use crate::error::ProfileResult;
use crate::profile::BoundaryLayerProfile;
use tbl_core::{checked_div, ensure_nonzero, trapezoid};

/// δ* = ∫ (1 − u/u_e) dy
pub fn displacement_thickness(y: &[f64], u: &[f64], u_e: f64) -> ProfileResult<f64> {
    let f: Vec<f64> = u.iter().map(|&ui| 1.0 - ui / u_e).collect();
    Ok(trapezoid(&f, y)?)
}

/// θ = ∫ (u/u_e)(1 − u/u_e) dy
pub fn momentum_thickness(y: &[f64], u: &[f64], u_e: f64) -> ProfileResult<f64> {
    let f: Vec<f64> = u
        .iter()
        .map(|&ui| {
            let r = ui / u_e;
            r * (1.0 - r)
        })
        .collect();
    Ok(trapezoid(&f, y)?)
}

/// Δ = ∫ (u_e − u)/u_τ dy
pub fn clauser_rotta_thickness(y: &[f64], u: &[f64], u_e: f64, u_tau: f64) -> ProfileResult<f64> {
    let u_tau = ensure_nonzero(u_tau, "friction velocity")?;
    let f: Vec<f64> = u.iter().map(|&ui| (u_e - ui) / u_tau).collect();
    Ok(trapezoid(&f, y)?)
}

impl BoundaryLayerProfile {
    /// Boundary-layer thickness δ: the wall distance of the edge sample.
    pub fn boundary_thickness(&self) -> f64 {
        self.y[self.edge.index]
    }

    /// Displacement thickness δ*.
    pub fn displacement_thickness(&self) -> f64 {
        self.delta_star
    }

    /// Momentum thickness θ.
    pub fn momentum_thickness(&self) -> f64 {
        self.theta
    }

    /// Shape factor H = δ*/θ.
    ///
    /// A vanishing θ is reported as [`crate::ProfileError::DivisionUndefined`], never as
    /// an infinite value.
    pub fn shape_factor(&self) -> ProfileResult<f64> {
        Ok(checked_div(
            self.delta_star,
            self.theta,
            "momentum thickness",
        )?)
    }

    /// Clauser–Rotta thickness Δ.
    pub fn clauser_rotta_thickness(&self) -> ProfileResult<f64> {
        let u_tau = self.friction_velocity()?;
        let (y, u) = self.boundary_layer_range();
        clauser_rotta_thickness(y, u, self.u_e, u_tau)
    }
}

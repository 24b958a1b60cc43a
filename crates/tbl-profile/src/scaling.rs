//! Inner- and outer-layer scalings.
//!
//! Unlike the integral thicknesses, these run over the whole measured profile,
//! free stream included, so curves can be compared against universal laws
//! across the full domain.

use crate::error::{ProfileError, ProfileResult};
use crate::profile::BoundaryLayerProfile;
use tbl_core::{checked_div, ensure_nonzero};

/// Lower and upper y+ bounds (exclusive) of the log-law overlay.
pub const LOG_REGION_Y_PLUS: (f64, f64) = (10.0, 1000.0);

/// Upper y+ bound (exclusive) of the viscous sub-layer overlay.
pub const SUB_LAYER_Y_PLUS_MAX: f64 = 12.0;

/// A pair of equal-length sequences, `x[i]` paired with `y[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Divide every element of `values` by `scale`.
fn scaled(values: &[f64], scale: f64, what: &'static str) -> ProfileResult<Vec<f64>> {
    let scale = ensure_nonzero(scale, what)?;
    Ok(values.iter().map(|v| v / scale).collect())
}

impl BoundaryLayerProfile {
    /// Friction velocity u_τ = sqrt(τ/ρ).
    ///
    /// A negative τ/ρ is rejected as invalid input rather than yielding NaN.
    pub fn friction_velocity(&self) -> ProfileResult<f64> {
        let ratio = self.conditions.tau.value / self.rho();
        if ratio < 0.0 {
            return Err(ProfileError::InvalidInput {
                what: "wall shear stress over density is negative",
            });
        }
        Ok(ratio.sqrt())
    }

    /// Friction velocity, required to be usable as a divisor.
    pub(crate) fn friction_velocity_nonzero(&self) -> ProfileResult<f64> {
        Ok(ensure_nonzero(self.friction_velocity()?, "friction velocity")?)
    }

    /// y+ = y·u_τ/ν over the full profile.
    pub fn y_plus(&self) -> ProfileResult<Vec<f64>> {
        let u_tau = self.friction_velocity()?;
        let nu = self.nu();
        Ok(self.y.iter().map(|y| y * u_tau / nu).collect())
    }

    /// u+ = u/u_τ over the full profile, index-paired with [`Self::y_plus`].
    pub fn u_plus(&self) -> ProfileResult<Vec<f64>> {
        let u_tau = self.friction_velocity_nonzero()?;
        Ok(self.u.iter().map(|u| u / u_tau).collect())
    }

    /// Measured profile in wall units, `(y+, u+)`.
    pub fn inner_scaling(&self) -> ProfileResult<Curve> {
        Ok(Curve::new(self.y_plus()?, self.u_plus()?))
    }

    /// Log-law overlay `u+ = ln(y+)/κ + B` at the profile's own y+ values
    /// with 10 < y+ < 1000.
    pub fn log_law(&self) -> ProfileResult<Curve> {
        let wm = self.config.wall_model;
        let (lo, hi) = LOG_REGION_Y_PLUS;
        let x: Vec<f64> = self
            .y_plus()?
            .into_iter()
            .filter(|&yp| yp > lo && yp < hi)
            .collect();
        let y = x.iter().map(|yp| yp.ln() / wm.kappa + wm.intercept).collect();
        Ok(Curve::new(x, y))
    }

    /// Viscous sub-layer overlay `u+ = y+` for y+ < 12.
    pub fn sub_layer(&self) -> ProfileResult<Curve> {
        let x: Vec<f64> = self
            .y_plus()?
            .into_iter()
            .filter(|&yp| yp < SUB_LAYER_Y_PLUS_MAX)
            .collect();
        let y = x.clone();
        Ok(Curve::new(x, y))
    }

    /// u/u_e over the full profile.
    pub fn velocity_ratio(&self) -> Vec<f64> {
        self.u.iter().map(|u| u / self.u_e).collect()
    }

    /// y/δ over the full profile.
    pub fn y_over_delta(&self) -> ProfileResult<Vec<f64>> {
        scaled(&self.y, self.boundary_thickness(), "boundary thickness")
    }

    /// Velocity defect in friction units, (u_e − u)/u_τ.
    pub fn velocity_defect(&self) -> ProfileResult<Vec<f64>> {
        let defect: Vec<f64> = self.u.iter().map(|u| self.u_e - u).collect();
        scaled(&defect, self.friction_velocity_nonzero()?, "friction velocity")
    }

    /// y/Δ over the full profile.
    pub fn y_over_clauser_rotta(&self) -> ProfileResult<Vec<f64>> {
        let delta = self.clauser_rotta_thickness()?;
        scaled(&self.y, delta, "Clauser-Rotta thickness")
    }

    /// Zagarola–Smits defect, (u_e − u)/(u_e·δ*/δ).
    pub fn zagarola_smits_defect(&self) -> ProfileResult<Vec<f64>> {
        let ratio = checked_div(
            self.delta_star,
            self.boundary_thickness(),
            "boundary thickness",
        )?;
        let scale = ensure_nonzero(self.u_e * ratio, "displacement thickness")?;
        let defect: Vec<f64> = self.u.iter().map(|u| self.u_e - u).collect();
        scaled(&defect, scale, "Zagarola-Smits velocity scale")
    }

    /// y/x over the full profile.
    pub fn y_over_x(&self) -> ProfileResult<Vec<f64>> {
        scaled(&self.y, self.conditions.x.value, "station coordinate")
    }

    /// Velocity defect relative to the free stream, (u_e − u)/u_e.
    pub fn relative_defect(&self) -> Vec<f64> {
        self.u.iter().map(|u| (self.u_e - u) / self.u_e).collect()
    }
}

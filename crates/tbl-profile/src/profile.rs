//! The boundary-layer profile value object.

use crate::error::{ProfileError, ProfileResult};
use crate::fluid::{FluidProperties, ProfileConfig, WallModelConstants};
use crate::ingest::{self, EdgeDetection};
use crate::integrals;
use tbl_core::units::{Length, Pressure, m, pa};

/// Wall shear stress, pressure gradient and station coordinate of one profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallConditions {
    /// Wall shear stress τ
    pub tau: Pressure,
    /// Streamwise pressure gradient dP/dx in Pa/m
    pub dpdx: f64,
    /// Streamwise station coordinate
    pub x: Length,
}

impl WallConditions {
    pub fn new(tau: Pressure, dpdx: f64, x: Length) -> Self {
        Self { tau, dpdx, x }
    }

    /// Build from raw SI values (Pa, Pa/m, m).
    pub fn from_si(tau_pa: f64, dpdx_pa_per_m: f64, x_m: f64) -> Self {
        Self::new(pa(tau_pa), dpdx_pa_per_m, m(x_m))
    }
}

/// A measured velocity profile at one streamwise station.
///
/// Built once from raw `(y, u)` samples; everything that does not depend on the
/// wall shear stress is computed at construction and never changes. All query
/// methods take `&self`, so one instance can be read from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLayerProfile {
    pub(crate) y: Vec<f64>,
    pub(crate) u: Vec<f64>,
    pub(crate) conditions: WallConditions,
    pub(crate) config: ProfileConfig,
    pub(crate) u_e: f64,
    pub(crate) edge: EdgeDetection,
    pub(crate) delta_star: f64,
    pub(crate) theta: f64,
}

impl BoundaryLayerProfile {
    /// Build a profile from raw samples in any order.
    ///
    /// Fails with [`ProfileError::InvalidInput`] on mismatched or short arrays,
    /// negative or all-equal wall distances, non-finite values, or a
    /// non-positive free-stream velocity.
    pub fn new(
        y: &[f64],
        u: &[f64],
        conditions: WallConditions,
        config: ProfileConfig,
    ) -> ProfileResult<Self> {
        ingest::validate_samples(y, u)?;
        if !(conditions.tau.value.is_finite()
            && conditions.dpdx.is_finite()
            && conditions.x.value.is_finite())
        {
            return Err(ProfileError::InvalidInput {
                what: "wall conditions must be finite",
            });
        }

        let sorted = ingest::sort_samples(y, u);
        if sorted.duplicate_y > 0 {
            tracing::warn!(
                duplicates = sorted.duplicate_y,
                "profile has repeated wall distances"
            );
        }

        let u_e = ingest::free_stream_velocity(&sorted.u)?;
        let edge = ingest::detect_edge(&sorted.u, u_e);
        if edge.clamped {
            tracing::warn!(
                x = conditions.x.value,
                edge_index = edge.index,
                "velocity never reached 99% of free stream; edge clamped to last sample"
            );
        }

        let n = edge.index + 1;
        let delta_star = integrals::displacement_thickness(&sorted.y[..n], &sorted.u[..n], u_e)?;
        let theta = integrals::momentum_thickness(&sorted.y[..n], &sorted.u[..n], u_e)?;

        tracing::debug!(
            x = conditions.x.value,
            samples = sorted.y.len(),
            u_e,
            edge_index = edge.index,
            "profile ingested"
        );

        Ok(Self {
            y: sorted.y,
            u: sorted.u,
            conditions,
            config,
            u_e,
            edge,
            delta_star,
            theta,
        })
    }

    /// Build a profile for air with the default wall model.
    pub fn with_air(y: &[f64], u: &[f64], conditions: WallConditions) -> ProfileResult<Self> {
        Self::new(y, u, conditions, ProfileConfig::default())
    }

    /// Wall distances, ascending.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Velocities paired with [`Self::y`].
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn conditions(&self) -> WallConditions {
        self.conditions
    }

    pub fn fluid(&self) -> FluidProperties {
        self.config.fluid
    }

    pub fn wall_model(&self) -> WallModelConstants {
        self.config.wall_model
    }

    /// Free-stream velocity u_e, the maximum velocity of the whole profile.
    pub fn u_e(&self) -> f64 {
        self.u_e
    }

    /// Index of the boundary-layer edge sample.
    pub fn edge_index(&self) -> usize {
        self.edge.index
    }

    pub fn edge_detection(&self) -> EdgeDetection {
        self.edge
    }

    /// Kinematic viscosity of the configured fluid (m²/s).
    pub(crate) fn nu(&self) -> f64 {
        self.config.fluid.nu().value
    }

    pub(crate) fn rho(&self) -> f64 {
        self.config.fluid.rho().value
    }

    /// Samples from the wall up to and including the edge.
    pub(crate) fn boundary_layer_range(&self) -> (&[f64], &[f64]) {
        let n = self.edge.index + 1;
        (&self.y[..n], &self.u[..n])
    }
}

//! Study file schema.

use serde::{Deserialize, Serialize};
use tbl_core::units::constants::{AIR_MU_PA_S, AIR_RHO_KG_M3};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub fluid: FluidDef,
    #[serde(default)]
    pub wall_model: WallModelDef,
    #[serde(default)]
    pub stations: Vec<StationDef>,
    /// Wall shear stress sampled along x, used for stations without `tau_pa`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_shear: Option<SeriesDef>,
    /// dP/dx sampled along x, used for stations without `dpdx_pa_m`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_gradient: Option<SeriesDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub mu_pa_s: f64,
    pub rho_kg_m3: f64,
}

impl Default for FluidDef {
    fn default() -> Self {
        Self {
            mu_pa_s: AIR_MU_PA_S,
            rho_kg_m3: AIR_RHO_KG_M3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WallModelDef {
    pub kappa: f64,
    pub b: f64,
}

impl Default for WallModelDef {
    fn default() -> Self {
        Self {
            kappa: 0.41,
            b: 5.2,
        }
    }
}

/// One measured profile and, optionally, its own wall conditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationDef {
    pub x_m: f64,
    pub y_m: Vec<f64>,
    pub u_m_s: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tau_pa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpdx_pa_m: Option<f64>,
}

/// A scalar sampled on its own x-grid, in any order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesDef {
    pub x_m: Vec<f64>,
    pub values: Vec<f64>,
}

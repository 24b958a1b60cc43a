//! Named curve selection for plotting collaborators.

use crate::error::ProfileResult;
use crate::profile::BoundaryLayerProfile;
use crate::scaling::Curve;
use std::fmt;
use std::str::FromStr;

/// One of the standard ways of drawing a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CurveKind {
    /// Raw profile, (u, y)
    Velocity,
    /// (u/u_e, y/δ)
    Outer,
    /// (y+, u+)
    Inner,
    /// (y/δ, (u_e − u)/u_τ)
    Defect,
    /// (y/Δ, (u_e − u)/u_τ)
    ClauserRotta,
    /// (y/x, (u_e − u)/u_e)
    PressureGradient,
    /// (y/Δ, (u_e − u)/(u_e·δ*/δ))
    ZagarolaSmits,
    /// Log-law overlay at the profile's y+
    LogLaw,
    /// Sub-layer overlay u+ = y+
    SubLayer,
}

impl CurveKind {
    pub const ALL: [CurveKind; 9] = [
        CurveKind::Velocity,
        CurveKind::Outer,
        CurveKind::Inner,
        CurveKind::Defect,
        CurveKind::ClauserRotta,
        CurveKind::PressureGradient,
        CurveKind::ZagarolaSmits,
        CurveKind::LogLaw,
        CurveKind::SubLayer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Velocity => "velocity",
            CurveKind::Outer => "outer",
            CurveKind::Inner => "inner",
            CurveKind::Defect => "defect",
            CurveKind::ClauserRotta => "clauser-rotta",
            CurveKind::PressureGradient => "pressure-gradient",
            CurveKind::ZagarolaSmits => "zagarola-smits",
            CurveKind::LogLaw => "log-law",
            CurveKind::SubLayer => "sub-layer",
        }
    }

    /// Axis labels, abscissa first.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            CurveKind::Velocity => ("u [m/s]", "y [m]"),
            CurveKind::Outer => ("u/u_e", "y/delta"),
            CurveKind::Inner | CurveKind::LogLaw | CurveKind::SubLayer => ("y+", "u+"),
            CurveKind::Defect => ("y/delta", "(u_e-u)/u_tau"),
            CurveKind::ClauserRotta => ("y/Delta", "(u_e-u)/u_tau"),
            CurveKind::PressureGradient => ("y/x", "(u_e-u)/u_e"),
            CurveKind::ZagarolaSmits => ("y/Delta", "(u_e-u)/(u_e delta*/delta)"),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = CurveKind::ALL.iter().map(|k| k.name()).collect();
                format!("unknown curve '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

impl BoundaryLayerProfile {
    /// Evaluate a named curve.
    pub fn curve(&self, kind: CurveKind) -> ProfileResult<Curve> {
        let curve = match kind {
            CurveKind::Velocity => Curve::new(self.u.clone(), self.y.clone()),
            CurveKind::Outer => Curve::new(self.velocity_ratio(), self.y_over_delta()?),
            CurveKind::Inner => self.inner_scaling()?,
            CurveKind::Defect => Curve::new(self.y_over_delta()?, self.velocity_defect()?),
            CurveKind::ClauserRotta => {
                Curve::new(self.y_over_clauser_rotta()?, self.velocity_defect()?)
            }
            CurveKind::PressureGradient => Curve::new(self.y_over_x()?, self.relative_defect()),
            CurveKind::ZagarolaSmits => Curve::new(
                self.y_over_clauser_rotta()?,
                self.zagarola_smits_defect()?,
            ),
            CurveKind::LogLaw => self.log_law()?,
            CurveKind::SubLayer => self.sub_layer()?,
        };
        Ok(curve)
    }
}

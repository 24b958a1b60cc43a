//! Scalar summary of one profile for tabulation.

use crate::error::ProfileResult;
use crate::profile::BoundaryLayerProfile;

/// Every scalar quantity of a profile.
///
/// Quantities that cannot be evaluated are `None`, and the reason is kept in
/// `undefined`, so one bad value does not hide the rest of the station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSummary {
    pub x_m: f64,
    pub u_e: f64,
    pub edge_index: usize,
    pub edge_clamped: bool,
    pub delta: f64,
    pub delta_star: f64,
    pub theta: f64,
    pub shape_factor: Option<f64>,
    pub u_tau: Option<f64>,
    pub clauser_rotta_thickness: Option<f64>,
    pub re_x: Option<f64>,
    pub re_tau: Option<f64>,
    pub re_theta: Option<f64>,
    pub re_delta_star: Option<f64>,
    pub beta: Option<f64>,
    pub p_plus: Option<f64>,
    pub k: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub undefined: Vec<UndefinedQuantity>,
}

/// A quantity that could not be evaluated, with the reason.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndefinedQuantity {
    pub quantity: String,
    pub reason: String,
}

impl BoundaryLayerProfile {
    /// Evaluate every scalar accessor once.
    pub fn summary(&self) -> ProfileSummary {
        let mut undefined = Vec::new();
        let mut keep = |quantity: &str, r: ProfileResult<f64>| match r {
            Ok(v) => Some(v),
            Err(e) => {
                undefined.push(UndefinedQuantity {
                    quantity: quantity.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        };

        let shape_factor = keep("H", self.shape_factor());
        let u_tau = keep("u_tau", self.friction_velocity());
        let clauser_rotta_thickness = keep("Delta", self.clauser_rotta_thickness());
        let re_x = keep("Re_x", self.reynolds_x());
        let re_tau = keep("Re_tau", self.friction_reynolds());
        let re_theta = keep("Re_theta", self.momentum_thickness_reynolds());
        let re_delta_star = keep("Re_delta*", self.displacement_thickness_reynolds());
        let beta = keep("beta", self.clauser_beta());
        let p_plus = keep("p+", self.mellor_p_plus());
        let k = keep("K", self.launder_k());

        ProfileSummary {
            x_m: self.conditions.x.value,
            u_e: self.u_e,
            edge_index: self.edge.index,
            edge_clamped: self.edge.clamped,
            delta: self.boundary_thickness(),
            delta_star: self.delta_star,
            theta: self.theta,
            shape_factor,
            u_tau,
            clauser_rotta_thickness,
            re_x,
            re_tau,
            re_theta,
            re_delta_star,
            beta,
            p_plus,
            k,
            undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::profile::{BoundaryLayerProfile, WallConditions};

    #[test]
    fn summary_collects_failures_without_dropping_station() {
        let p = BoundaryLayerProfile::with_air(
            &[0.0, 0.1, 0.2],
            &[0.0, 5.0, 10.0],
            WallConditions::from_si(-0.2, 1.0, 1.0),
        )
        .unwrap();
        let s = p.summary();
        assert_eq!(s.u_e, 10.0);
        assert!(s.re_x.is_some());
        assert!(s.u_tau.is_none());
        assert!(s.re_tau.is_none());
        assert!(s.beta.is_some());
        assert!(s.undefined.iter().any(|u| u.quantity == "u_tau"));
    }

    #[test]
    fn summary_matches_accessors() {
        let p = BoundaryLayerProfile::with_air(
            &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
            &[0.0, 5.0, 9.0, 9.9, 10.0, 10.0],
            WallConditions::from_si(0.1, 0.0, 1.0),
        )
        .unwrap();
        let s = p.summary();
        assert!(s.undefined.is_empty());
        assert_eq!(s.delta, 0.3);
        assert_eq!(s.shape_factor, Some(p.shape_factor().unwrap()));
        assert_eq!(s.beta, Some(0.0));
    }
}

//! Batch characterization of every station in a study.
//!
//! Stations are independent, so they are processed in parallel; results keep
//! the station order of the study file.

use crate::align::AlignedSeries;
use crate::report::{StationReport, StudyReport};
use crate::schema::Study;
use crate::{StudyError, StudyResult};
use rayon::prelude::*;
use tbl_core::units::{kg_per_m3, pa_s};
use tbl_profile::{
    BoundaryLayerProfile, FluidProperties, ProfileConfig, WallConditions, WallModelConstants,
};

/// Fluid and wall-model configuration described by the study.
pub fn profile_config(study: &Study) -> StudyResult<ProfileConfig> {
    let fluid = FluidProperties::new(
        pa_s(study.fluid.mu_pa_s),
        kg_per_m3(study.fluid.rho_kg_m3),
    )?;
    let wall_model = WallModelConstants::new(study.wall_model.kappa, study.wall_model.b)?;
    Ok(ProfileConfig { fluid, wall_model })
}

/// Wall conditions of every station, explicit values first, series otherwise.
pub fn resolve_conditions(study: &Study) -> StudyResult<Vec<WallConditions>> {
    let shear = study
        .wall_shear
        .as_ref()
        .map(AlignedSeries::from_def)
        .transpose()?;
    let gradient = study
        .pressure_gradient
        .as_ref()
        .map(AlignedSeries::from_def)
        .transpose()?;

    study
        .stations
        .iter()
        .enumerate()
        .map(|(index, station)| -> StudyResult<WallConditions> {
            let tau = match (station.tau_pa, &shear) {
                (Some(tau), _) => tau,
                (None, Some(series)) => series.at(station.x_m)?,
                (None, None) => {
                    return Err(StudyError::InvalidInput(format!(
                        "station {index} has no wall shear stress"
                    )));
                }
            };
            let dpdx = match (station.dpdx_pa_m, &gradient) {
                (Some(dpdx), _) => dpdx,
                (None, Some(series)) => series.at(station.x_m)?,
                (None, None) => {
                    return Err(StudyError::InvalidInput(format!(
                        "station {index} has no pressure gradient"
                    )));
                }
            };
            Ok(WallConditions::from_si(tau, dpdx, station.x_m))
        })
        .collect()
}

/// Build the profile of a single station.
pub fn build_station(study: &Study, index: usize) -> StudyResult<BoundaryLayerProfile> {
    let station = study
        .stations
        .get(index)
        .ok_or_else(|| StudyError::StationNotFound {
            index,
            count: study.stations.len(),
        })?;
    let config = profile_config(study)?;
    let conditions = resolve_conditions(study)?;
    let profile = BoundaryLayerProfile::new(
        &station.y_m,
        &station.u_m_s,
        conditions[index],
        config,
    )?;
    Ok(profile)
}

/// Build every station's profile; the first malformed station aborts.
pub fn build_profiles(study: &Study) -> StudyResult<Vec<BoundaryLayerProfile>> {
    let config = profile_config(study)?;
    let conditions = resolve_conditions(study)?;

    study
        .stations
        .par_iter()
        .zip(conditions.par_iter())
        .map(|(station, &cond)| -> StudyResult<BoundaryLayerProfile> {
            Ok(BoundaryLayerProfile::new(
                &station.y_m,
                &station.u_m_s,
                cond,
                config,
            )?)
        })
        .collect()
}

/// Characterize every station.
///
/// A station whose samples are malformed is reported with its error instead of
/// aborting the batch, as are quantities that are undefined for a station.
pub fn analyze(study: &Study) -> StudyResult<StudyReport> {
    let config = profile_config(study)?;
    let conditions = resolve_conditions(study)?;

    let stations: Vec<StationReport> = study
        .stations
        .par_iter()
        .zip(conditions.par_iter())
        .enumerate()
        .map(|(index, (station, &cond))| {
            let base = StationReport {
                index,
                x_m: station.x_m,
                tau_pa: cond.tau.value,
                dpdx_pa_m: cond.dpdx,
                summary: None,
                error: None,
            };
            match BoundaryLayerProfile::new(&station.y_m, &station.u_m_s, cond, config) {
                Ok(profile) => {
                    let summary = profile.summary();
                    for u in &summary.undefined {
                        tracing::warn!(
                            station = index,
                            quantity = %u.quantity,
                            reason = %u.reason,
                            "quantity undefined"
                        );
                    }
                    tracing::debug!(station = index, x = station.x_m, "station characterized");
                    StationReport {
                        summary: Some(summary),
                        ..base
                    }
                }
                Err(e) => {
                    tracing::warn!(station = index, error = %e, "station rejected");
                    StationReport {
                        error: Some(e.to_string()),
                        ..base
                    }
                }
            }
        })
        .collect();

    let failed = stations.iter().filter(|s| s.error.is_some()).count();
    tracing::info!(
        stations = stations.len(),
        failed,
        study = %study.name,
        "study analyzed"
    );

    Ok(StudyReport {
        name: study.name.clone(),
        fluid: study.fluid,
        stations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FluidDef, SeriesDef, StationDef, WallModelDef};
    use crate::validate::LATEST_VERSION;

    fn station(x: f64, tau: Option<f64>) -> StationDef {
        StationDef {
            x_m: x,
            y_m: vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
            u_m_s: vec![0.0, 5.0, 9.0, 9.9, 10.0, 10.0],
            tau_pa: tau,
            dpdx_pa_m: Some(0.0),
        }
    }

    fn study(stations: Vec<StationDef>) -> Study {
        Study {
            version: LATEST_VERSION,
            name: "test".to_string(),
            fluid: FluidDef::default(),
            wall_model: WallModelDef::default(),
            stations,
            wall_shear: Some(SeriesDef {
                x_m: vec![3.0, 1.0],
                values: vec![0.3, 0.1],
            }),
            pressure_gradient: None,
        }
    }

    #[test]
    fn explicit_conditions_win_over_series() {
        let s = study(vec![station(2.0, Some(0.5)), station(2.0, None)]);
        let c = resolve_conditions(&s).unwrap();
        assert_eq!(c[0].tau.value, 0.5);
        assert!((c[1].tau.value - 0.2).abs() < 1e-12);
    }

    #[test]
    fn build_profiles_keeps_order() {
        let s = study(vec![station(1.0, None), station(3.0, None), station(2.0, None)]);
        let profiles = build_profiles(&s).unwrap();
        let xs: Vec<f64> = profiles.iter().map(|p| p.conditions().x.value).collect();
        assert_eq!(xs, vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn analyze_reports_bad_station_without_aborting() {
        let mut bad = station(2.0, Some(0.1));
        bad.u_m_s = vec![0.0; 6];
        let s = study(vec![station(1.0, Some(0.1)), bad]);
        let report = analyze(&s).unwrap();
        assert_eq!(report.stations.len(), 2);
        assert!(report.stations[0].summary.is_some());
        assert!(report.stations[1].error.is_some());
        assert!(build_profiles(&s).is_err());
    }

    #[test]
    fn build_station_out_of_range() {
        let s = study(vec![station(1.0, None)]);
        assert!(matches!(
            build_station(&s, 4),
            Err(StudyError::StationNotFound { index: 4, count: 1 })
        ));
        assert_eq!(build_station(&s, 0).unwrap().edge_index(), 3);
    }
}

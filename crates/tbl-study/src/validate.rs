//! Study validation logic.

use crate::schema::{SeriesDef, StationDef, Study};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing wall condition: station {station} has no {quantity} and no series to interpolate")]
    MissingCondition {
        station: usize,
        quantity: &'static str,
    },

    #[error("Study has no stations")]
    NoStations,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    if !(study.fluid.mu_pa_s.is_finite() && study.fluid.mu_pa_s > 0.0) {
        return Err(invalid("fluid.mu_pa_s", study.fluid.mu_pa_s, "must be positive"));
    }
    if !(study.fluid.rho_kg_m3.is_finite() && study.fluid.rho_kg_m3 > 0.0) {
        return Err(invalid(
            "fluid.rho_kg_m3",
            study.fluid.rho_kg_m3,
            "must be positive",
        ));
    }
    if !(study.wall_model.kappa.is_finite() && study.wall_model.kappa > 0.0) {
        return Err(invalid(
            "wall_model.kappa",
            study.wall_model.kappa,
            "must be positive",
        ));
    }
    if !study.wall_model.b.is_finite() {
        return Err(invalid("wall_model.b", study.wall_model.b, "must be finite"));
    }

    if let Some(series) = &study.wall_shear {
        validate_series(series, "wall_shear")?;
    }
    if let Some(series) = &study.pressure_gradient {
        validate_series(series, "pressure_gradient")?;
    }

    if study.stations.is_empty() {
        return Err(ValidationError::NoStations);
    }
    for (index, station) in study.stations.iter().enumerate() {
        validate_station(index, station)?;
        if station.tau_pa.is_none() && study.wall_shear.is_none() {
            return Err(ValidationError::MissingCondition {
                station: index,
                quantity: "wall shear stress",
            });
        }
        if station.dpdx_pa_m.is_none() && study.pressure_gradient.is_none() {
            return Err(ValidationError::MissingCondition {
                station: index,
                quantity: "pressure gradient",
            });
        }
    }

    Ok(())
}

fn validate_series(series: &SeriesDef, name: &str) -> Result<(), ValidationError> {
    if series.x_m.len() != series.values.len() {
        return Err(invalid(
            format!("{name}.values"),
            series.values.len(),
            &format!("length must match x_m ({})", series.x_m.len()),
        ));
    }
    if series.x_m.is_empty() {
        return Err(invalid(format!("{name}.x_m"), 0, "series is empty"));
    }
    if series
        .x_m
        .iter()
        .chain(&series.values)
        .any(|v| !v.is_finite())
    {
        return Err(invalid(name, "non-finite", "series values must be finite"));
    }
    Ok(())
}

fn validate_station(index: usize, station: &StationDef) -> Result<(), ValidationError> {
    let field = |f: &str| format!("stations[{index}].{f}");

    if !station.x_m.is_finite() {
        return Err(invalid(field("x_m"), station.x_m, "must be finite"));
    }
    if station.y_m.len() != station.u_m_s.len() {
        return Err(invalid(
            field("u_m_s"),
            station.u_m_s.len(),
            &format!("length must match y_m ({})", station.y_m.len()),
        ));
    }
    if station.y_m.len() < 2 {
        return Err(invalid(
            field("y_m"),
            station.y_m.len(),
            "profile needs at least 2 samples",
        ));
    }
    if let Some(tau) = station.tau_pa {
        if !tau.is_finite() {
            return Err(invalid(field("tau_pa"), tau, "must be finite"));
        }
    }
    if let Some(dpdx) = station.dpdx_pa_m {
        if !dpdx.is_finite() {
            return Err(invalid(field("dpdx_pa_m"), dpdx, "must be finite"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FluidDef, WallModelDef};

    fn study() -> Study {
        Study {
            version: LATEST_VERSION,
            name: "flat plate".to_string(),
            fluid: FluidDef::default(),
            wall_model: WallModelDef::default(),
            stations: vec![StationDef {
                x_m: 1.0,
                y_m: vec![0.0, 0.1],
                u_m_s: vec![0.0, 1.0],
                tau_pa: Some(0.1),
                dpdx_pa_m: Some(0.0),
            }],
            wall_shear: None,
            pressure_gradient: None,
        }
    }

    #[test]
    fn accepts_minimal_study() {
        validate_study(&study()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let mut s = study();
        s.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_study(&s),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_mismatched_station_arrays() {
        let mut s = study();
        s.stations[0].u_m_s.push(2.0);
        let err = validate_study(&s).unwrap_err();
        assert!(err.to_string().contains("stations[0].u_m_s"));
    }

    #[test]
    fn requires_a_source_for_each_condition() {
        let mut s = study();
        s.stations[0].tau_pa = None;
        assert_eq!(
            validate_study(&s),
            Err(ValidationError::MissingCondition {
                station: 0,
                quantity: "wall shear stress"
            })
        );

        s.wall_shear = Some(SeriesDef {
            x_m: vec![0.0, 2.0],
            values: vec![0.2, 0.1],
        });
        validate_study(&s).unwrap();
    }

    #[test]
    fn rejects_bad_series_and_fluid() {
        let mut s = study();
        s.pressure_gradient = Some(SeriesDef {
            x_m: vec![0.0],
            values: vec![],
        });
        assert!(validate_study(&s).is_err());

        let mut s = study();
        s.fluid.rho_kg_m3 = 0.0;
        assert!(validate_study(&s).is_err());
    }

    #[test]
    fn rejects_empty_study() {
        let mut s = study();
        s.stations.clear();
        assert_eq!(validate_study(&s), Err(ValidationError::NoStations));
    }
}

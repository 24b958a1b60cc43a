use tbl_study::*;

fn ramp_station(x: f64, delta: f64, tau: Option<f64>) -> StationDef {
    let h = delta / 20.0;
    let y_m: Vec<f64> = (0..=40).map(|k| k as f64 * h).collect();
    let u_m_s = y_m.iter().map(|&y| 10.0 * (y / delta).min(1.0)).collect();
    StationDef {
        x_m: x,
        y_m,
        u_m_s,
        tau_pa: tau,
        dpdx_pa_m: None,
    }
}

fn study() -> Study {
    Study {
        version: LATEST_VERSION,
        name: "ramp".to_string(),
        fluid: FluidDef::default(),
        wall_model: WallModelDef::default(),
        stations: vec![
            ramp_station(1.0, 0.01, None),
            ramp_station(2.0, 0.02, Some(0.08)),
        ],
        wall_shear: Some(SeriesDef {
            x_m: vec![0.0, 4.0],
            values: vec![0.2, 0.0],
        }),
        pressure_gradient: Some(SeriesDef {
            x_m: vec![4.0, 0.0],
            values: vec![4.0, 0.0],
        }),
    }
}

#[test]
fn roundtrip_yaml() {
    let path = std::env::temp_dir().join("tbl_study_roundtrip.yaml");
    let original = study();
    save_yaml(&path, &original).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(original, loaded);
}

#[test]
fn roundtrip_json() {
    let path = std::env::temp_dir().join("tbl_study_roundtrip.json");
    let original = study();
    save_json(&path, &original).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(original, loaded);
}

#[test]
fn save_rejects_invalid_study() {
    let mut s = study();
    s.stations.clear();
    let path = std::env::temp_dir().join("tbl_study_invalid.yaml");
    assert!(matches!(
        save_yaml(&path, &s),
        Err(StudyError::Validation(ValidationError::NoStations))
    ));
}

#[test]
fn fluid_and_wall_model_default_to_air() {
    let yaml = r#"
version: 1
name: defaults
stations:
  - x_m: 1.0
    y_m: [0.0, 0.1]
    u_m_s: [0.0, 1.0]
    tau_pa: 0.1
    dpdx_pa_m: 0.0
"#;
    let s: Study = serde_yaml::from_str(yaml).unwrap();
    validate_study(&s).unwrap();
    assert_eq!(s.fluid, FluidDef::default());
    assert_eq!(s.wall_model.kappa, 0.41);
    assert_eq!(s.wall_model.b, 5.2);
}

#[test]
fn interpolated_conditions_feed_the_report() {
    let report = analyze(&study()).unwrap();
    assert_eq!(report.stations.len(), 2);

    let first = &report.stations[0];
    assert!((first.tau_pa - 0.15).abs() < 1e-12);
    assert!((first.dpdx_pa_m - 1.0).abs() < 1e-12);

    let second = &report.stations[1];
    assert_eq!(second.tau_pa, 0.08);
    assert!((second.dpdx_pa_m - 2.0).abs() < 1e-12);

    let s = second.summary.as_ref().unwrap();
    assert!((s.delta - 0.02).abs() < 1e-12);
    assert!((s.delta_star / 0.01 - 1.0).abs() < 1e-9);
    let beta = s.beta.unwrap();
    assert!((beta - 2.0 * s.delta_star / 0.08).abs() < 1e-12);

    let json = report.to_json().unwrap();
    let back: StudyReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn bundled_study_analyzes() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../studies/flat_plate.yaml");
    let s = load(&path).unwrap();
    let report = analyze(&s).unwrap();
    assert_eq!(report.stations.len(), 3);
    for (_, summary) in report.summaries() {
        assert!(summary.shape_factor.unwrap() > 1.0);
        assert!(summary.re_theta.unwrap() > 0.0);
        assert!(!summary.edge_clamped);
    }
    // Explicit shear on the last station overrides the series.
    assert_eq!(report.stations[2].tau_pa, 0.14);
}

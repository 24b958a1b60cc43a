//! tbl-study: study files and batch characterization of boundary-layer stations.

pub mod align;
pub mod analysis;
pub mod report;
pub mod schema;
pub mod validate;

pub use align::AlignedSeries;
pub use analysis::{analyze, build_profiles, build_station, profile_config, resolve_conditions};
pub use report::{StationReport, StudyReport};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_study};

use std::path::Path;

pub type StudyResult<T> = Result<T, StudyError>;

#[derive(thiserror::Error, Debug)]
pub enum StudyError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Profile error: {0}")]
    Profile(#[from] tbl_profile::ProfileError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] tbl_core::TblError),

    #[error("Station not found: {index} (study has {count})")]
    StationNotFound { index: usize, count: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let study: Study = serde_yaml::from_str(&content)?;
    validate_study(&study)?;
    tracing::info!(path = %path.display(), stations = study.stations.len(), "study loaded");
    Ok(study)
}

pub fn save_yaml(path: &Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = serde_yaml::to_string(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let study: Study = serde_json::from_str(&content)?;
    validate_study(&study)?;
    tracing::info!(path = %path.display(), stations = study.stations.len(), "study loaded");
    Ok(study)
}

pub fn save_json(path: &Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = serde_json::to_string_pretty(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a study, choosing the format from the file extension (`.json` or YAML).
pub fn load(path: &Path) -> StudyResult<Study> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

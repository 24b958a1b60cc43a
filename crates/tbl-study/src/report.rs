//! Serializable study results.

use crate::schema::FluidDef;
use serde::{Deserialize, Serialize};
use tbl_profile::ProfileSummary;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyReport {
    pub name: String,
    pub fluid: FluidDef,
    pub stations: Vec<StationReport>,
}

/// Result for one station, in study order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationReport {
    pub index: usize,
    pub x_m: f64,
    pub tau_pa: f64,
    pub dpdx_pa_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProfileSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StudyReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Stations that were characterized.
    pub fn summaries(&self) -> impl Iterator<Item = (usize, &ProfileSummary)> {
        self.stations
            .iter()
            .filter_map(|s| s.summary.as_ref().map(|summary| (s.index, summary)))
    }
}

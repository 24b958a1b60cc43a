//! Alignment of x-sampled wall quantities onto profile stations.
//!
//! Wall shear stress and pressure gradient usually come from a denser x-grid
//! than the profiles. Values at a station are linearly interpolated and held
//! constant outside the sampled range.

use crate::schema::SeriesDef;
use crate::{StudyError, StudyResult};
use tbl_core::interp_linear;

/// A series sorted by ascending x, ready for interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    x: Vec<f64>,
    values: Vec<f64>,
}

impl AlignedSeries {
    pub fn new(x: &[f64], values: &[f64]) -> StudyResult<Self> {
        if x.len() != values.len() || x.is_empty() {
            return Err(StudyError::InvalidInput(format!(
                "series needs matching non-empty arrays (x: {}, values: {})",
                x.len(),
                values.len()
            )));
        }
        let mut pairs: Vec<(f64, f64)> = x.iter().copied().zip(values.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (x, values) = pairs.into_iter().unzip();
        Ok(Self { x, values })
    }

    pub fn from_def(def: &SeriesDef) -> StudyResult<Self> {
        Self::new(&def.x_m, &def.values)
    }

    /// Value at station `x`.
    pub fn at(&self, x: f64) -> StudyResult<f64> {
        Ok(interp_linear(x, &self.x, &self.values)?)
    }

    /// Values at each of `stations`, in the same order.
    pub fn at_all(&self, stations: &[f64]) -> StudyResult<Vec<f64>> {
        stations.iter().map(|&x| self.at(x)).collect()
    }
}

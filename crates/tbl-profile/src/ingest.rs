//! Profile ingestion: validation, ordering, free stream and edge detection.

use crate::error::{ProfileError, ProfileResult};

/// Fraction of the free-stream velocity that marks the boundary-layer edge.
pub const EDGE_VELOCITY_RATIO: f64 = 0.99;

/// Result of the edge scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDetection {
    /// Index of the edge sample in the sorted arrays.
    pub index: usize,
    /// True when the threshold was never reached and the index was clamped
    /// to the last sample.
    pub clamped: bool,
}

/// Samples ordered by ascending wall distance.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SortedSamples {
    pub y: Vec<f64>,
    pub u: Vec<f64>,
    pub duplicate_y: usize,
}

/// Check the raw arrays against the input contract.
pub(crate) fn validate_samples(y: &[f64], u: &[f64]) -> ProfileResult<()> {
    if y.len() != u.len() {
        return Err(ProfileError::InvalidInput {
            what: "y and u must have the same length",
        });
    }
    if y.len() < 2 {
        return Err(ProfileError::InvalidInput {
            what: "profile needs at least 2 samples",
        });
    }
    if y.iter().chain(u).any(|v| !v.is_finite()) {
        return Err(ProfileError::InvalidInput {
            what: "profile samples must be finite",
        });
    }
    if y.iter().any(|&v| v < 0.0) {
        return Err(ProfileError::InvalidInput {
            what: "wall distance must be non-negative",
        });
    }
    if y.iter().all(|&v| v == y[0]) {
        return Err(ProfileError::InvalidInput {
            what: "wall distances are all equal",
        });
    }
    Ok(())
}

/// Sort `(y, u)` pairs by `y`, breaking ties on `u`.
///
/// The tie-break makes the result independent of the order the samples were
/// supplied in, including repeated wall distances.
pub(crate) fn sort_samples(y: &[f64], u: &[f64]) -> SortedSamples {
    let mut pairs: Vec<(f64, f64)> = y.iter().copied().zip(u.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let duplicate_y = pairs.windows(2).filter(|w| w[0].0 == w[1].0).count();
    let (y, u) = pairs.into_iter().unzip();

    SortedSamples { y, u, duplicate_y }
}

/// Free-stream velocity: the largest velocity anywhere in the profile.
pub fn free_stream_velocity(u: &[f64]) -> ProfileResult<f64> {
    let u_e = u.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(u_e.is_finite() && u_e > 0.0) {
        return Err(ProfileError::InvalidInput {
            what: "free-stream velocity must be positive",
        });
    }
    Ok(u_e)
}

/// Scan outward from the wall for the first sample with `u / reference >= 0.99`.
///
/// This is a first-crossing rule: a noisy profile that overshoots early and dips
/// later still stops at the first overshoot. If no sample crosses, the index is
/// clamped to the last sample and the result is flagged.
pub fn detect_edge(u: &[f64], reference: f64) -> EdgeDetection {
    let last = u.len().saturating_sub(1);
    for (index, &ui) in u.iter().enumerate() {
        if ui / reference >= EDGE_VELOCITY_RATIO {
            return EdgeDetection {
                index,
                clamped: false,
            };
        }
    }
    EdgeDetection {
        index: last,
        clamped: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_pairs_together() {
        let s = sort_samples(&[0.3, 0.0, 0.1], &[9.0, 0.0, 5.0]);
        assert_eq!(s.y, vec![0.0, 0.1, 0.3]);
        assert_eq!(s.u, vec![0.0, 5.0, 9.0]);
        assert_eq!(s.duplicate_y, 0);
    }

    #[test]
    fn ties_are_ordered_by_velocity() {
        let a = sort_samples(&[0.1, 0.1, 0.0], &[6.0, 5.0, 0.0]);
        let b = sort_samples(&[0.0, 0.1, 0.1], &[0.0, 5.0, 6.0]);
        assert_eq!(a, b);
        assert_eq!(a.duplicate_y, 1);
    }

    #[test]
    fn validation_failures() {
        assert!(validate_samples(&[0.0, 1.0], &[1.0]).is_err());
        assert!(validate_samples(&[0.0], &[1.0]).is_err());
        assert!(validate_samples(&[0.0, -0.1], &[1.0, 2.0]).is_err());
        assert!(validate_samples(&[0.2, 0.2], &[1.0, 2.0]).is_err());
        assert!(validate_samples(&[0.0, f64::NAN], &[1.0, 2.0]).is_err());
        assert!(validate_samples(&[0.0, 0.1], &[1.0, 2.0]).is_ok());
    }

    #[test]
    fn free_stream_is_max() {
        assert_eq!(free_stream_velocity(&[1.0, 7.0, 3.0]).unwrap(), 7.0);
        assert!(free_stream_velocity(&[0.0, -1.0]).is_err());
    }

    #[test]
    fn edge_exactly_at_threshold() {
        let e = detect_edge(&[0.0, 5.0, 9.0, 9.9, 10.0, 10.0], 10.0);
        assert_eq!(
            e,
            EdgeDetection {
                index: 3,
                clamped: false
            }
        );
    }

    #[test]
    fn edge_takes_first_crossing_on_noisy_profile() {
        let e = detect_edge(&[0.0, 9.95, 9.5, 10.0], 10.0);
        assert_eq!(e.index, 1);
        assert!(!e.clamped);
    }

    #[test]
    fn edge_clamps_when_never_reached() {
        let e = detect_edge(&[0.5, 0.5, 0.5, 0.5], 1.0);
        assert_eq!(
            e,
            EdgeDetection {
                index: 3,
                clamped: true
            }
        );
    }
}

//! Trapezoidal quadrature and linear interpolation on sampled data.
//!
//! Measured profiles are not uniformly spaced, so both routines work on the
//! actual abscissae rather than a fixed step.

use crate::{Real, TblError, TblResult};

/// Integrate `f(x)` sampled at `x` with the trapezoidal rule.
///
/// Uses the real spacing `x[i+1] - x[i]` for every panel. Fewer than two
/// samples integrate to zero, matching a degenerate interval.
pub fn trapezoid(f: &[Real], x: &[Real]) -> TblResult<Real> {
    if f.len() != x.len() {
        return Err(TblError::InvalidArg {
            what: "trapezoid: ordinate and abscissa lengths differ",
        });
    }

    let area = x
        .windows(2)
        .zip(f.windows(2))
        .map(|(xs, fs)| 0.5 * (xs[1] - xs[0]) * (fs[0] + fs[1]))
        .sum();

    Ok(area)
}

/// Linearly interpolate `(xp, fp)` at `x`.
///
/// `xp` must be ascending. Outside the sampled range the end value is held.
pub fn interp_linear(x: Real, xp: &[Real], fp: &[Real]) -> TblResult<Real> {
    if xp.len() != fp.len() {
        return Err(TblError::InvalidArg {
            what: "interp: abscissa and ordinate lengths differ",
        });
    }
    let (Some(&x_first), Some(&x_last)) = (xp.first(), xp.last()) else {
        return Err(TblError::InvalidArg {
            what: "interp: empty series",
        });
    };

    if x <= x_first {
        return Ok(fp[0]);
    }
    if x >= x_last {
        return Ok(fp[fp.len() - 1]);
    }

    // First sample strictly greater than x; guaranteed in 1..len by the clamps above.
    let hi = xp.partition_point(|&v| v <= x);
    let lo = hi - 1;

    let dx = xp[hi] - xp[lo];
    if dx <= 0.0 {
        return Ok(fp[lo]);
    }
    let alpha = (x - xp[lo]) / dx;
    Ok(fp[lo] + alpha * (fp[hi] - fp[lo]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapezoid_non_uniform_linear_is_exact() {
        let x = [0.0, 0.1, 0.15, 0.5, 1.0];
        let f: Vec<Real> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let area = trapezoid(&f, &x).unwrap();
        assert!((area - 2.0).abs() < 1e-12, "area = {area}");
    }

    #[test]
    fn trapezoid_single_point_is_zero() {
        assert_eq!(trapezoid(&[3.0], &[1.0]).unwrap(), 0.0);
        assert_eq!(trapezoid(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn trapezoid_rejects_length_mismatch() {
        assert!(trapezoid(&[1.0, 2.0], &[0.0]).is_err());
    }

    #[test]
    fn interp_inside_and_clamped() {
        let xp = [0.0, 1.0, 3.0];
        let fp = [10.0, 20.0, 0.0];
        assert_eq!(interp_linear(0.5, &xp, &fp).unwrap(), 15.0);
        assert_eq!(interp_linear(2.0, &xp, &fp).unwrap(), 10.0);
        assert_eq!(interp_linear(1.0, &xp, &fp).unwrap(), 20.0);
        assert_eq!(interp_linear(-4.0, &xp, &fp).unwrap(), 10.0);
        assert_eq!(interp_linear(9.0, &xp, &fp).unwrap(), 0.0);
    }

    #[test]
    fn interp_empty_is_error() {
        assert!(interp_linear(0.0, &[], &[]).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn trapezoid_matches_closed_form_for_lines(
            mut xs in prop::collection::vec(0.0_f64..10.0, 2..40),
            a in -5.0_f64..5.0,
            b in -5.0_f64..5.0,
        ) {
            xs.sort_by(|p, q| p.total_cmp(q));
            let f: Vec<f64> = xs.iter().map(|x| a * x + b).collect();
            let (x0, x1) = (xs[0], xs[xs.len() - 1]);
            let exact = 0.5 * a * (x1 * x1 - x0 * x0) + b * (x1 - x0);
            let area = trapezoid(&f, &xs).unwrap();
            prop_assert!((area - exact).abs() <= 1e-9 * (1.0 + exact.abs()));
        }
    }
}

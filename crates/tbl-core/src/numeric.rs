use crate::TblError;

/// Floating point type used throughout system
pub type Real = f64;

/// Smallest magnitude accepted as a divisor.
///
/// Thicknesses of real boundary layers are many orders of magnitude above this,
/// so anything smaller is a collapsed profile rather than a physical value.
pub const DENOMINATOR_FLOOR: Real = 1e-14;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TblError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TblError::NonFinite { what, value: v })
    }
}

/// Accept `v` as a divisor only if it is finite and not vanishingly small.
pub fn ensure_nonzero(v: Real, what: &'static str) -> Result<Real, TblError> {
    let v = ensure_finite(v, what)?;
    if v.abs() <= DENOMINATOR_FLOOR {
        Err(TblError::ZeroDenominator { what, value: v })
    } else {
        Ok(v)
    }
}

/// Divide, rejecting vanishing denominators and non-finite quotients.
pub fn checked_div(num: Real, den: Real, what: &'static str) -> Result<Real, TblError> {
    let den = ensure_nonzero(den, what)?;
    ensure_finite(num / den, what)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_nonzero_rejects_zero_and_tiny() {
        assert!(matches!(
            ensure_nonzero(0.0, "theta"),
            Err(TblError::ZeroDenominator { what: "theta", .. })
        ));
        assert!(ensure_nonzero(-1e-20, "theta").is_err());
        assert_eq!(ensure_nonzero(-2.5, "tau").unwrap(), -2.5);
    }

    #[test]
    fn checked_div_propagates() {
        assert_eq!(checked_div(3.0, 2.0, "ratio").unwrap(), 1.5);
        assert!(checked_div(1.0, 0.0, "ratio").is_err());
        assert!(checked_div(Real::INFINITY, 1.0, "ratio").is_err());
    }
}

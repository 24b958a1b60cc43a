//! Error types for profile characterization.

use tbl_core::error::TblError;
use thiserror::Error;

/// Errors raised while building a profile or evaluating one of its quantities.
///
/// Construction errors mean no profile exists. Query errors are local to the
/// accessor that raised them; the profile stays usable for everything else.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Division undefined: {what} is zero or vanishing")]
    DivisionUndefined { what: &'static str },

    #[error("Non-finite result: {what}")]
    NonFinite { what: &'static str },
}

pub type ProfileResult<T> = Result<T, ProfileError>;

impl From<TblError> for ProfileError {
    fn from(e: TblError) -> Self {
        match e {
            TblError::ZeroDenominator { what, .. } => ProfileError::DivisionUndefined { what },
            TblError::NonFinite { what, .. } => ProfileError::NonFinite { what },
            TblError::InvalidArg { what } => ProfileError::InvalidInput { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProfileError::DivisionUndefined {
            what: "momentum thickness",
        };
        assert!(err.to_string().contains("momentum thickness"));
    }

    #[test]
    fn error_conversion() {
        let core_err = TblError::ZeroDenominator {
            what: "theta",
            value: 0.0,
        };
        let err: ProfileError = core_err.into();
        assert_eq!(err, ProfileError::DivisionUndefined { what: "theta" });
    }
}

use thiserror::Error;

pub type TblResult<T> = Result<T, TblError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TblError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Zero or vanishing denominator: {what} = {value}")]
    ZeroDenominator { what: &'static str, value: f64 },
}

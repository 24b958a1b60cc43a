//! tbl-core: numeric foundation for boundary-layer profile analysis.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + float guards)
//! - quadrature (trapezoidal rule on non-uniform grids, linear interpolation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod quadrature;
pub mod units;

pub use error::{TblError, TblResult};
pub use numeric::*;
pub use quadrature::{interp_linear, trapezoid};
pub use units::*;

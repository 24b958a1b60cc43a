//! tbl-profile: turbulent boundary-layer characterization from one velocity profile.
//!
//! A [`BoundaryLayerProfile`] is built once from measured `(y, u)` samples plus
//! the wall shear stress, pressure gradient and station coordinate. It then
//! answers, without mutation:
//! - integral thicknesses (δ, δ*, θ, Δ) and the shape factor H
//! - inner and outer scalings (y+, u+, u/u_e, y/δ, velocity defects, ...)
//! - Reynolds numbers and the pressure-gradient parameters β, p+ and K
//!
//! # Example
//!
//! ```
//! use tbl_profile::{BoundaryLayerProfile, WallConditions};
//!
//! let profile = BoundaryLayerProfile::with_air(
//!     &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
//!     &[0.0, 5.0, 9.0, 9.9, 10.0, 10.0],
//!     WallConditions::from_si(0.1, 0.0, 1.0),
//! )
//! .unwrap();
//!
//! assert_eq!(profile.u_e(), 10.0);
//! assert_eq!(profile.boundary_thickness(), 0.3);
//! let h = profile.shape_factor().unwrap();
//! assert!(h > 1.0);
//! ```

pub mod curves;
pub mod error;
pub mod fluid;
pub mod groups;
pub mod ingest;
pub mod integrals;
pub mod profile;
pub mod scaling;
pub mod summary;

// Re-exports
pub use curves::CurveKind;
pub use error::{ProfileError, ProfileResult};
pub use fluid::{FluidProperties, ProfileConfig, WallModelConstants};
pub use ingest::{EDGE_VELOCITY_RATIO, EdgeDetection, detect_edge, free_stream_velocity};
pub use profile::{BoundaryLayerProfile, WallConditions};
pub use scaling::Curve;
pub use summary::{ProfileSummary, UndefinedQuantity};

//! Error types for weight-mask generation.
//!
//! This module defines the error type used throughout the mask module.
//! Errors fall into two groups: configuration errors (an invalid
//! [`WeightSpec`](super::WeightSpec)) and numeric errors (non-finite input
//! data). Both are raised before any weight is computed.

use thiserror::Error;

/// Errors that can occur while validating or building a weight mask.
///
/// Every variant is detected up front by
/// [`setup_weights`](super::setup_weights); no partially computed weight
/// array is ever returned.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse weight parameters TOML.
    #[error("failed to parse weight parameters: {0}")]
    ParamsParse(#[from] toml::de::Error),

    /// The density window is not a valid positive, ordered range.
    #[error("invalid density window: lower = {lower}, upper = {upper} (need 0 < lower < upper, both finite)")]
    InvalidDensityWindow {
        /// Lower edge of the window.
        lower: f64,
        /// Upper edge of the window.
        upper: f64,
    },

    /// The density grid does not match the sampling grid.
    #[error("density grid shape {found:?} does not match grid shape {expected:?}")]
    DensityShapeMismatch {
        /// Shape of the sampling grid.
        expected: [usize; 3],
        /// Shape of the supplied density grid.
        found: [usize; 3],
    },

    /// The density grid contains a non-finite value.
    #[error("non-finite density value {value} at voxel {index:?}")]
    NonFiniteDensity {
        /// Voxel index of the offending value.
        index: [usize; 3],
        /// The non-finite value.
        value: f64,
    },

    /// A switching radii pair is not a valid ordered range.
    #[error("invalid switching radii: outer = {outer}, inner = {inner} (need outer >= inner >= 0, both finite)")]
    InvalidRadii {
        /// Radius at which the weight reaches 1.
        outer: f64,
        /// Radius at or below which the weight is 0.
        inner: f64,
    },

    /// A near zone selects an atomic number absent from the system.
    #[error("no atom with atomic number {0} in the system")]
    UnknownElement(u8),

    /// Distance-based criteria were requested for a system without atoms.
    #[error("input system is empty: near and far weights require at least one atom")]
    EmptySystem,

    /// A `[dens]` window was configured but no density grid was supplied.
    #[error("a density window was given without a density grid")]
    MissingDensityGrid,
}

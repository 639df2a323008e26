//! Configuration types for weight-mask generation.
//!
//! This module defines the structures describing which masking criteria
//! [`setup_weights`](super::setup_weights) applies and with which
//! parameters:
//!
//! - [`WeightSpec`] — Main specification struct
//! - [`DensityMask`] — Density grid plus log-window damping parameters
//! - [`NearZone`] / [`NearTarget`] — Per-atom exclusion zones
//! - [`FarField`] — Global far-field envelope
//! - [`WeightParams`] — TOML-loadable parameter file, without the density grid

use ndarray::Array3;
use serde::Deserialize;

use super::error::Error;
use crate::model::grid::UniformGrid;
use crate::model::system::System;

/// Density-based damping: a density grid and the window over which the
/// weight falls from 1 to 0.
///
/// Voxels with density at or below `lower` keep weight 1 (vacuum regions are
/// fully counted); voxels at or above `upper` get weight 0 (core regions are
/// excluded). In between, the weight follows a cubic switch in log-density,
/// so the damping is smooth in the quantity that actually spans the orders
/// of magnitude.
#[derive(Debug, Clone)]
pub struct DensityMask {
    /// Density sampled on the same grid the weights are computed on.
    pub rho: Array3<f64>,
    /// Density at or below which the weight is 1.
    pub lower: f64,
    /// Density at or above which the weight is 0.
    pub upper: f64,
}

impl DensityMask {
    pub fn new(rho: Array3<f64>, lower: f64, upper: f64) -> Self {
        Self { rho, lower, upper }
    }

    fn validate(&self, grid: &UniformGrid) -> Result<(), Error> {
        if !(self.lower.is_finite() && self.upper.is_finite())
            || self.lower <= 0.0
            || self.lower >= self.upper
        {
            return Err(Error::InvalidDensityWindow {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.rho.dim() != grid.dim() {
            let (f0, f1, f2) = self.rho.dim();
            return Err(Error::DensityShapeMismatch {
                expected: grid.shape(),
                found: [f0, f1, f2],
            });
        }
        for ((i, j, k), &value) in self.rho.indexed_iter() {
            if !value.is_finite() {
                return Err(Error::NonFiniteDensity {
                    index: [i, j, k],
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Selects which atoms a [`NearZone`] applies to.
///
/// Selection is by atomic number; the "every atom" case is an explicit
/// variant rather than a reserved number, so it can never collide with a
/// real element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NearTarget {
    /// Apply the zone to every atom in the system.
    AllAtoms,
    /// Apply the zone to all atoms with this atomic number.
    Element(u8),
}

impl NearTarget {
    #[inline]
    pub(crate) fn selects(&self, number: u8) -> bool {
        match self {
            NearTarget::AllAtoms => true,
            NearTarget::Element(z) => *z == number,
        }
    }
}

/// An exclusion zone around selected atoms.
///
/// The weight contribution of one selected atom rises from 0 at distance
/// `inner` to 1 at distance `outer`; contributions from multiple atoms
/// multiply. With `inner == outer` the zone is a hard spherical cutoff.
///
/// # Examples
///
/// ```
/// use espmask::{NearTarget, NearZone};
///
/// // Exclude a 0.5-radius ball around every hydrogen
/// let zone = NearZone::element(1, 0.5, 0.5);
/// assert_eq!(zone.target, NearTarget::Element(1));
///
/// // Smoothly carve out all nuclei
/// let all = NearZone::all_atoms(1.0, 0.2);
/// assert_eq!(all.target, NearTarget::AllAtoms);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearZone {
    /// Which atoms this zone applies to.
    pub target: NearTarget,
    /// Distance at which the weight reaches 1.
    pub outer: f64,
    /// Distance at or below which the weight is 0.
    pub inner: f64,
}

impl NearZone {
    /// Creates a zone around all atoms with the given atomic number.
    pub fn element(number: u8, outer: f64, inner: f64) -> Self {
        Self {
            target: NearTarget::Element(number),
            outer,
            inner,
        }
    }

    /// Creates a zone around every atom in the system.
    pub fn all_atoms(outer: f64, inner: f64) -> Self {
        Self {
            target: NearTarget::AllAtoms,
            outer,
            inner,
        }
    }
}

/// Global far-field envelope evaluated against the nearest atom.
///
/// A voxel farther than `outer` from every atom keeps weight 1; a voxel
/// within `inner` of some atom gets weight 0. Unlike [`NearZone`], this is a
/// single envelope over the nearest-atom distance, not a per-atom product.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FarField {
    /// Nearest-atom distance at or beyond which the weight is 1.
    pub outer: f64,
    /// Nearest-atom distance at or below which the weight is 0.
    pub inner: f64,
}

/// Complete specification of one weight-mask computation.
///
/// All criteria are optional and independent; whatever is present is
/// multiplied together voxel by voxel. The default spec applies nothing and
/// yields a weight of 1 everywhere.
#[derive(Debug, Clone, Default)]
pub struct WeightSpec {
    /// Density-based damping.
    pub dens: Option<DensityMask>,
    /// Near-atom exclusion zones, applied in order.
    pub near: Vec<NearZone>,
    /// Far-field envelope.
    pub far: Option<FarField>,
}

impl WeightSpec {
    /// Checks the spec against a system and grid.
    ///
    /// # Errors
    ///
    /// Returns the first applicable configuration or numeric error; see
    /// [`Error`] for the full taxonomy.
    pub(crate) fn validate(&self, system: &System, grid: &UniformGrid) -> Result<(), Error> {
        if system.is_empty() && (!self.near.is_empty() || self.far.is_some()) {
            return Err(Error::EmptySystem);
        }
        if let Some(dens) = &self.dens {
            dens.validate(grid)?;
        }
        for zone in &self.near {
            check_radii(zone.outer, zone.inner)?;
            if let NearTarget::Element(z) = zone.target {
                if !system.contains_number(z) {
                    return Err(Error::UnknownElement(z));
                }
            }
        }
        if let Some(far) = &self.far {
            check_radii(far.outer, far.inner)?;
        }
        Ok(())
    }
}

fn check_radii(outer: f64, inner: f64) -> Result<(), Error> {
    if !(outer.is_finite() && inner.is_finite()) || inner < 0.0 || outer < inner {
        return Err(Error::InvalidRadii { outer, inner });
    }
    Ok(())
}

/// Density window of a TOML parameter file, without the density grid itself.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DensityWindow {
    /// Density at or below which the weight is 1.
    pub lower: f64,
    /// Density at or above which the weight is 0.
    pub upper: f64,
}

/// One `[[near]]` entry of a TOML parameter file.
///
/// Omitting the `element` key applies the zone to every atom.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NearZoneParams {
    /// Atomic number to select, or `None` for all atoms.
    pub element: Option<u8>,
    /// Distance at which the weight reaches 1.
    pub outer: f64,
    /// Distance at or below which the weight is 0.
    pub inner: f64,
}

/// TOML-loadable weight parameters.
///
/// Carries everything a [`WeightSpec`] needs except the density grid, which
/// only exists at run time and is attached with [`into_spec`](Self::into_spec).
///
/// # Examples
///
/// ```
/// use espmask::WeightParams;
///
/// let params = WeightParams::from_toml_str(
///     r#"
///     [[near]]
///     element = 1
///     outer = 0.5
///     inner = 0.5
///
///     [far]
///     outer = 1.0
///     inner = 0.5
///     "#,
/// )?;
/// assert!(params.dens.is_none());
/// assert_eq!(params.near.len(), 1);
///
/// let spec = params.into_spec(None)?;
/// assert_eq!(spec.near.len(), 1);
/// assert!(spec.far.is_some());
/// # Ok::<(), espmask::Error>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct WeightParams {
    /// Density window, if density damping is wanted.
    pub dens: Option<DensityWindow>,
    /// Near-atom exclusion zones.
    #[serde(default)]
    pub near: Vec<NearZoneParams>,
    /// Far-field envelope.
    pub far: Option<FarField>,
}

impl WeightParams {
    /// Parses weight parameters from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamsParse`] if the TOML is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        let params: WeightParams = toml::from_str(toml)?;
        Ok(params)
    }

    /// Combines the parameters with a runtime density grid into a
    /// [`WeightSpec`].
    ///
    /// A supplied grid is ignored when the parameters carry no `[dens]`
    /// window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDensityGrid`] if a `[dens]` window is present
    /// but `rho` is `None`.
    pub fn into_spec(self, rho: Option<Array3<f64>>) -> Result<WeightSpec, Error> {
        let dens = match (self.dens, rho) {
            (Some(window), Some(rho)) => Some(DensityMask::new(rho, window.lower, window.upper)),
            (Some(_), None) => return Err(Error::MissingDensityGrid),
            (None, _) => None,
        };
        let near = self
            .near
            .iter()
            .map(|zone| NearZone {
                target: match zone.element {
                    Some(z) => NearTarget::Element(z),
                    None => NearTarget::AllAtoms,
                },
                outer: zone.outer,
                inner: zone.inner,
            })
            .collect();
        Ok(WeightSpec {
            dens,
            near,
            far: self.far,
        })
    }
}

//! A pure Rust library for generating fit-weight masks on uniform real-space
//! grids, as used when fitting atomic point charges to an electrostatic
//! potential. It combines density damping, near-atom exclusion, and a
//! far-field envelope into one weight per voxel.
//!
//! # Features
//!
//! - **Density damping** — Smooth log-density switch that fully counts
//!   vacuum regions and excludes dense core regions
//! - **Near-atom exclusion** — Per-element or all-atom exclusion zones with
//!   smooth or hard spherical cutoffs, combined multiplicatively
//! - **Far-field envelope** — Single envelope over the nearest-atom
//!   distance, keeping only voxels far enough from every nucleus
//! - **Periodic grids** — Nearest-image distances along any combination of
//!   periodic axes, with general (skewed) cell vectors
//! - **Parameter files** — TOML-loadable mask parameters via
//!   [`WeightParams`]
//!
//! # Quick Start
//!
//! The main entry point is the [`setup_weights`] function, which takes a
//! [`System`], a [`UniformGrid`], and a [`WeightSpec`] and produces one
//! weight in [0, 1] per voxel:
//!
//! ```
//! use espmask::{Atom, FarField, NearTarget, NearZone, System, UniformGrid};
//! use espmask::{setup_weights, WeightSpec};
//!
//! // A diatomic toy system
//! let mut system = System::new();
//! system.atoms.push(Atom::new(8, [0.5, 0.5, 0.5])); // O
//! system.atoms.push(Atom::new(1, [1.3, 0.5, 0.5])); // H
//!
//! // A 10×10×10 orthogonal grid with 0.1 spacing, no periodicity
//! let grid = UniformGrid::new(
//!     [0.0, 0.0, 0.0],
//!     [[0.1, 0.0, 0.0], [0.0, 0.1, 0.0], [0.0, 0.0, 0.1]],
//!     [10, 10, 10],
//!     [false, false, false],
//! );
//!
//! // Exclude balls around every atom, keep only the surrounding shell
//! let spec = WeightSpec {
//!     near: vec![NearZone {
//!         target: NearTarget::AllAtoms,
//!         outer: 0.4,
//!         inner: 0.1,
//!     }],
//!     far: Some(FarField {
//!         outer: 1.0,
//!         inner: 0.5,
//!     }),
//!     ..Default::default()
//! };
//!
//! let weights = setup_weights(&system, &grid, &spec)?;
//! assert_eq!(weights.dim(), (10, 10, 10));
//! assert!(weights.iter().all(|&w| (0.0..=1.0).contains(&w)));
//!
//! // Voxels inside an exclusion ball carry no weight at all
//! let at_oxygen = grid.nearest_index([0.5, 0.5, 0.5]);
//! assert_eq!(weights[at_oxygen], 0.0);
//! # Ok::<(), espmask::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`setup_weights`] — Main weight-mask computation
//! - [`WeightSpec`] — Specification of the criteria to apply
//! - [`WeightParams`] — TOML parameter files
//!
//! # Data Types
//!
//! ## Input Structures
//!
//! - [`System`] — Ordered collection of atoms
//! - [`Atom`] — Single atom with atomic number and Cartesian coordinates
//! - [`UniformGrid`] — Uniform 3D grid with optional periodic axes
//!
//! ## Specification
//!
//! - [`DensityMask`] — Density grid plus damping window
//! - [`NearZone`] / [`NearTarget`] — Exclusion zones and their atom selection
//! - [`FarField`] — Far-field envelope radii
//!
//! The output is a plain [`ndarray::Array3<f64>`](ndarray::Array3) shaped
//! like the grid; it carries no state shared with this crate.

mod mask;
mod model;

pub use model::atom::Atom;
pub use model::grid::UniformGrid;
pub use model::system::System;

pub use mask::{
    DensityMask, DensityWindow, FarField, NearTarget, NearZone, NearZoneParams, WeightParams,
    WeightSpec, setup_weights,
};

pub use mask::Error;

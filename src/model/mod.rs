//! Core data structures for grid-based weight generation.
//!
//! - [`atom`] – Minimal atom representation with atomic number and Cartesian
//!   coordinates.
//! - [`system`] – Ordered collections of atoms.
//! - [`grid`] – Uniform real-space grids with optional periodic axes.
//!
//! The data model intentionally separates molecular geometry ([`System`])
//! from the sampling grid ([`UniformGrid`]); the [`crate::setup_weights`]
//! pipeline consumes both without mutating either.
//!
//! [`System`]: system::System
//! [`UniformGrid`]: grid::UniformGrid

pub mod atom;
pub mod grid;
pub mod system;

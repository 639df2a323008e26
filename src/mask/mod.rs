mod config;
mod dens;
mod error;
mod far;
mod near;
mod switch;

pub use config::{
    DensityMask, DensityWindow, FarField, NearTarget, NearZone, NearZoneParams, WeightParams,
    WeightSpec,
};
pub use error::Error;

use ndarray::Array3;

use crate::model::grid::UniformGrid;
use crate::model::system::System;

/// Computes the fit weight for every voxel of the grid.
///
/// The spec's criteria are validated up front and then multiplied together
/// voxel by voxel; an empty spec yields a weight of 1 everywhere. The result
/// has the grid's shape and every entry lies in [0, 1].
///
/// # Errors
///
/// Returns a configuration or numeric [`Error`] before any weight is
/// computed; see [`Error`] for the taxonomy.
pub fn setup_weights(
    system: &System,
    grid: &UniformGrid,
    spec: &WeightSpec,
) -> Result<Array3<f64>, Error> {
    spec.validate(system, grid)?;

    let mut weights = Array3::ones(grid.dim());

    if let Some(dens) = &spec.dens {
        dens::apply(dens, &mut weights);
    }
    for zone in &spec.near {
        near::apply(zone, system, grid, &mut weights);
    }
    if let Some(far) = &spec.far {
        far::apply(far, system, grid, &mut weights);
    }

    Ok(weights)
}

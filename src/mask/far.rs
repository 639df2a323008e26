//! Far-field inclusion envelope.

use ndarray::Array3;

use super::config::FarField;
use super::switch::switch_weight;
use crate::model::grid::UniformGrid;
use crate::model::system::System;

/// Multiplies the far-field envelope into `weights`.
///
/// Unlike near zones this is a single factor per voxel, computed from the
/// distance to the nearest atom: beyond `outer` from every atom the factor
/// is exactly 1, within `inner` of some atom it is exactly 0.
pub(crate) fn apply(far: &FarField, system: &System, grid: &UniformGrid, weights: &mut Array3<f64>) {
    for ((i, j, k), w) in weights.indexed_iter_mut() {
        let point = grid.point([i, j, k]);
        let nearest = system
            .atoms
            .iter()
            .map(|atom| grid.min_image_distance(point, atom.position))
            .fold(f64::INFINITY, f64::min);
        *w *= switch_weight(nearest, far.inner, far.outer, true);
    }
}

//! Near-atom exclusion zones.

use ndarray::Array3;

use super::config::NearZone;
use super::switch::switch_weight;
use crate::model::grid::UniformGrid;
use crate::model::system::System;

/// Multiplies one zone's exclusion weights into `weights`.
///
/// Every selected atom contributes an independent factor rising from 0 at
/// the zone's inner radius to 1 at its outer radius; distances use the
/// nearest-image convention of the grid's periodic axes. Applying one zone
/// per atom and multiplying the results is equivalent to a single combined
/// zone, up to floating-point rounding.
pub(crate) fn apply(
    zone: &NearZone,
    system: &System,
    grid: &UniformGrid,
    weights: &mut Array3<f64>,
) {
    let centers: Vec<[f64; 3]> = system
        .atoms
        .iter()
        .filter(|atom| zone.target.selects(atom.number))
        .map(|atom| atom.position)
        .collect();

    for ((i, j, k), w) in weights.indexed_iter_mut() {
        let point = grid.point([i, j, k]);
        for center in &centers {
            let d = grid.min_image_distance(point, *center);
            *w *= switch_weight(d, zone.inner, zone.outer, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::system::System;

    // Four atoms on a small skewed grid, periodic along x and z.
    fn fixture() -> (System, UniformGrid) {
        let system = System::from_arrays(
            &[
                [0.0, 1.5, 2.3],
                [-0.1, 1.1, 0.0],
                [2.0, 1.0, 0.0],
                [-1.0, 1.0, 1.1],
            ],
            &[1, 1, 2, 2],
        );
        let grid = UniformGrid::new(
            [1.0, 0.0, 1.0],
            [[0.15, 0.0, 0.0], [0.0, 0.20, 0.01], [0.01, 0.01, 0.15]],
            [10, 10, 20],
            [true, false, true],
        );
        (system, grid)
    }

    fn apply_zones(zones: &[NearZone], system: &System, grid: &UniformGrid) -> Array3<f64> {
        let mut weights = Array3::ones(grid.dim());
        for zone in zones {
            apply(zone, system, grid, &mut weights);
        }
        weights
    }

    #[test]
    fn weights_stay_within_unit_interval() {
        let (system, grid) = fixture();
        let zones = [NearZone::element(1, 0.5, 0.5), NearZone::element(2, 1.0, 0.2)];
        let weights = apply_zones(&zones, &system, &grid);
        assert!(weights.iter().all(|&w| (0.0..=1.0).contains(&w)));
    }

    #[test]
    fn voxel_at_an_atom_is_fully_excluded() {
        let (system, grid) = fixture();
        let zones = [NearZone::element(1, 0.5, 0.5), NearZone::element(2, 1.0, 0.2)];
        let weights = apply_zones(&zones, &system, &grid);

        // The grid point nearest to atom 2 sits well inside the 0.2 inner
        // radius, so its weight must be exactly zero.
        let index = grid.nearest_index(system.atoms[2].position);
        assert_eq!(weights[index], 0.0);
    }

    #[test]
    fn zones_combine_as_products() {
        let (system, grid) = fixture();
        let combined = apply_zones(
            &[NearZone::element(1, 0.5, 0.5), NearZone::element(2, 1.0, 0.2)],
            &system,
            &grid,
        );
        let only_h = apply_zones(&[NearZone::element(1, 0.5, 0.5)], &system, &grid);
        let only_he = apply_zones(&[NearZone::element(2, 1.0, 0.2)], &system, &grid);

        for (index, &w) in combined.indexed_iter() {
            assert!((w - only_h[index] * only_he[index]).abs() < 1e-10);
        }
    }

    #[test]
    fn all_atoms_equals_product_over_elements() {
        let (system, grid) = fixture();
        let all = apply_zones(&[NearZone::all_atoms(0.5, 0.2)], &system, &grid);
        let per_element = apply_zones(
            &[NearZone::element(1, 0.5, 0.2), NearZone::element(2, 0.5, 0.2)],
            &system,
            &grid,
        );

        for (index, &w) in all.indexed_iter() {
            assert!((w - per_element[index]).abs() < 1e-10);
        }
    }

    #[test]
    fn distant_voxels_are_untouched() {
        let system = System::from_arrays(&[[0.0, 0.0, 0.0]], &[6]);
        let grid = UniformGrid::new(
            [0.0; 3],
            [[0.3, 0.0, 0.0], [0.0, 0.3, 0.0], [0.0, 0.0, 0.3]],
            [8, 8, 8],
            [false; 3],
        );
        let weights = apply_zones(&[NearZone::all_atoms(0.5, 0.2)], &system, &grid);
        // Opposite corner is ~3.6 away, far beyond the outer radius.
        assert_eq!(weights[[7, 7, 7]], 1.0);
    }
}

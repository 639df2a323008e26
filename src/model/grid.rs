//! Uniform real-space grids with optional periodic axes.
//!
//! A [`UniformGrid`] places sample points at integer combinations of three
//! cell vectors, starting from an origin. Axes can be periodic independently;
//! distances and index lookups wrap along periodic axes only.

use nalgebra::{Matrix3, Vector3};

/// A uniform 3D grid defined by an origin, three cell vectors, an integer
/// shape, and per-axis periodicity flags.
///
/// The grid point with index `(i, j, k)` sits at
/// `origin + i·rvecs[0] + j·rvecs[1] + k·rvecs[2]`. Along a periodic axis the
/// lattice repeats with period `shape[axis] · rvecs[axis]`.
#[derive(Debug, Clone)]
pub struct UniformGrid {
    origin: [f64; 3],
    rvecs: [[f64; 3]; 3],
    shape: [usize; 3],
    pbc: [bool; 3],
    /// Cell matrix with `rvecs` as columns; maps grid indices to Cartesian.
    cell: Matrix3<f64>,
    cell_inv: Matrix3<f64>,
}

impl UniformGrid {
    /// Creates a new grid.
    ///
    /// # Arguments
    ///
    /// * `origin` — Cartesian position of grid point `(0, 0, 0)`
    /// * `rvecs` — Cell vectors; `rvecs[axis]` is the step along that axis
    /// * `shape` — Number of grid points per axis
    /// * `pbc` — Periodicity flag per axis
    ///
    /// # Panics
    ///
    /// Panics if any shape entry is zero or the cell vectors are linearly
    /// dependent.
    pub fn new(origin: [f64; 3], rvecs: [[f64; 3]; 3], shape: [usize; 3], pbc: [bool; 3]) -> Self {
        assert!(
            shape.iter().all(|&n| n > 0),
            "grid shape entries must be positive"
        );
        let cell = Matrix3::from_columns(&[
            Vector3::from(rvecs[0]),
            Vector3::from(rvecs[1]),
            Vector3::from(rvecs[2]),
        ]);
        let cell_inv = cell
            .try_inverse()
            .expect("grid cell vectors must be linearly independent");
        Self {
            origin,
            rvecs,
            shape,
            pbc,
            cell,
            cell_inv,
        }
    }

    #[inline]
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    #[inline]
    pub fn rvecs(&self) -> [[f64; 3]; 3] {
        self.rvecs
    }

    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    #[inline]
    pub fn pbc(&self) -> [bool; 3] {
        self.pbc
    }

    /// Grid shape as a tuple, in the form `ndarray` shapes take.
    #[inline]
    pub fn dim(&self) -> (usize, usize, usize) {
        (self.shape[0], self.shape[1], self.shape[2])
    }

    /// Cartesian position of the grid point at `index`.
    pub fn point(&self, index: [usize; 3]) -> [f64; 3] {
        let steps = Vector3::new(index[0] as f64, index[1] as f64, index[2] as f64);
        let pos = Vector3::from(self.origin) + self.cell * steps;
        [pos.x, pos.y, pos.z]
    }

    /// Fractional grid coordinates of a Cartesian displacement from the origin.
    ///
    /// The result counts cell-vector steps; `to_frac(point(i) - origin)`
    /// recovers `i` up to rounding.
    pub fn to_frac(&self, delta: [f64; 3]) -> [f64; 3] {
        let frac = self.cell_inv * Vector3::from(delta);
        [frac.x, frac.y, frac.z]
    }

    /// Index of the grid point nearest to a Cartesian position.
    ///
    /// Periodic axes wrap modulo the shape; non-periodic axes clamp to the
    /// grid bounds.
    pub fn nearest_index(&self, position: [f64; 3]) -> [usize; 3] {
        let delta = [
            position[0] - self.origin[0],
            position[1] - self.origin[1],
            position[2] - self.origin[2],
        ];
        let frac = self.to_frac(delta);
        let mut index = [0usize; 3];
        for axis in 0..3 {
            let n = self.shape[axis] as i64;
            let rounded = frac[axis].round() as i64;
            index[axis] = if self.pbc[axis] {
                rounded.rem_euclid(n) as usize
            } else {
                rounded.clamp(0, n - 1) as usize
            };
        }
        index
    }

    /// Distance between two Cartesian points under the nearest-image
    /// convention of the periodic axes.
    ///
    /// The displacement is reduced to the image closest to zero along every
    /// periodic axis; non-periodic axes are left untouched. For strongly
    /// skewed cells this is the conventional single-shift minimum image, valid
    /// while the distances of interest stay below half the box extents.
    pub fn min_image_distance(&self, a: [f64; 3], b: [f64; 3]) -> f64 {
        let delta = Vector3::new(a[0] - b[0], a[1] - b[1], a[2] - b[2]);
        let mut frac = self.cell_inv * delta;
        for axis in 0..3 {
            if self.pbc[axis] {
                let n = self.shape[axis] as f64;
                frac[axis] -= (frac[axis] / n).round() * n;
            }
        }
        (self.cell * frac).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn orthogonal_grid() -> UniformGrid {
        UniformGrid::new(
            [0.0, 0.0, 0.0],
            [[0.5, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 0.5]],
            [10, 10, 10],
            [true, false, true],
        )
    }

    fn skewed_grid() -> UniformGrid {
        UniformGrid::new(
            [1.0, 0.0, 1.0],
            [[0.15, 0.0, 0.0], [0.0, 0.20, 0.01], [0.01, 0.01, 0.15]],
            [10, 10, 20],
            [true, false, true],
        )
    }

    #[test]
    fn point_positions() {
        let grid = orthogonal_grid();
        assert_eq!(grid.point([0, 0, 0]), [0.0, 0.0, 0.0]);
        let p = grid.point([2, 1, 4]);
        assert_abs_diff_eq!(p[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn skewed_point_includes_couplings() {
        let grid = skewed_grid();
        let p = grid.point([0, 1, 1]);
        // origin + rvecs[1] + rvecs[2]
        assert_abs_diff_eq!(p[0], 1.0 + 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 0.20 + 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(p[2], 1.0 + 0.01 + 0.15, epsilon = 1e-12);
    }

    #[test]
    fn to_frac_inverts_point() {
        let grid = skewed_grid();
        let p = grid.point([3, 7, 12]);
        let delta = [
            p[0] - grid.origin()[0],
            p[1] - grid.origin()[1],
            p[2] - grid.origin()[2],
        ];
        let frac = grid.to_frac(delta);
        assert_abs_diff_eq!(frac[0], 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(frac[1], 7.0, epsilon = 1e-9);
        assert_abs_diff_eq!(frac[2], 12.0, epsilon = 1e-9);
    }

    #[test]
    fn nearest_index_wraps_periodic_axes() {
        let grid = orthogonal_grid();
        // One step left of the origin along periodic x wraps to the last row.
        let index = grid.nearest_index([-0.5, 0.0, 0.0]);
        assert_eq!(index, [9, 0, 0]);
        // A full period beyond the end maps back to the start.
        let index = grid.nearest_index([5.0, 0.0, 0.0]);
        assert_eq!(index, [0, 0, 0]);
    }

    #[test]
    fn nearest_index_clamps_aperiodic_axes() {
        let grid = orthogonal_grid();
        let index = grid.nearest_index([0.0, -2.0, 0.0]);
        assert_eq!(index[1], 0);
        let index = grid.nearest_index([0.0, 99.0, 0.0]);
        assert_eq!(index[1], 9);
    }

    #[test]
    fn min_image_crosses_periodic_boundary() {
        let grid = orthogonal_grid();
        // Box length along x is 5.0; points 0.25 from either edge are 0.5
        // apart through the boundary, not 4.5 across the box.
        let d = grid.min_image_distance([0.25, 0.0, 0.0], [4.75, 0.0, 0.0]);
        assert_abs_diff_eq!(d, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn min_image_leaves_aperiodic_axes_alone() {
        let grid = orthogonal_grid();
        let d = grid.min_image_distance([0.0, 0.25, 0.0], [0.0, 4.75, 0.0]);
        assert_abs_diff_eq!(d, 4.5, epsilon = 1e-12);
    }

    #[test]
    fn min_image_direct_distance_inside_box() {
        let grid = orthogonal_grid();
        let d = grid.min_image_distance([1.0, 1.0, 1.0], [1.5, 1.0, 1.0]);
        assert_abs_diff_eq!(d, 0.5, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_shape_panics() {
        UniformGrid::new(
            [0.0; 3],
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            [10, 0, 10],
            [false; 3],
        );
    }

    #[test]
    #[should_panic(expected = "linearly independent")]
    fn singular_cell_panics() {
        UniformGrid::new(
            [0.0; 3],
            [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            [4, 4, 4],
            [false; 3],
        );
    }
}

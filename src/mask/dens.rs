//! Density-based damping of fit weights.

use ndarray::{Array3, Zip};

use super::config::DensityMask;
use super::switch::switch_weight;

/// Multiplies the density weight into `weights`, voxel by voxel.
///
/// The switch runs in log-density, so the transition is smooth across the
/// orders of magnitude a real-space density spans. Densities at or below
/// zero count as vacuum and keep their weight.
pub(crate) fn apply(mask: &DensityMask, weights: &mut Array3<f64>) {
    let ln_lower = mask.lower.ln();
    let ln_upper = mask.upper.ln();
    Zip::from(weights).and(&mask.rho).for_each(|w, &rho| {
        *w *= density_weight(rho, ln_lower, ln_upper);
    });
}

#[inline]
fn density_weight(rho: f64, ln_lower: f64, ln_upper: f64) -> f64 {
    if rho <= 0.0 {
        return 1.0;
    }
    switch_weight(rho.ln(), ln_lower, ln_upper, false)
}

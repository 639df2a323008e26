//! Shared cubic switching function used by every masking criterion.

/// Cubic switching polynomial `S(x) = 0.25·x·(x² − 3) + 0.5`.
///
/// Monotone decreasing on [−1, 1] with `S(−1) = 1`, `S(1) = 0` and zero
/// derivative at both endpoints.
#[inline]
fn cubic(x: f64) -> f64 {
    0.25 * x * (x * x - 3.0) + 0.5
}

/// Smooth transition between 1 and 0 across the window `[lower, upper]`.
///
/// With `invert == false` the weight falls from 1 at or below `lower` to 0 at
/// or above `upper`; with `invert == true` it rises from 0 to 1 instead. A
/// degenerate window (`lower == upper`) acts as a hard cutoff with the
/// `lower` side winning at the boundary.
pub(crate) fn switch_weight(value: f64, lower: f64, upper: f64, invert: bool) -> f64 {
    let below = if invert { 0.0 } else { 1.0 };
    if value <= lower {
        return below;
    }
    if value >= upper {
        return 1.0 - below;
    }
    let x = 2.0 * (value - lower) / (upper - lower) - 1.0;
    if invert {
        1.0 - cubic(x)
    } else {
        cubic(x)
    }
}

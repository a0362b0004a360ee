use crate::mpm::nsdf::LagRange;

/// Approximates the position of the true NSDF maximum near the integer lag
/// `lag` by fitting a parabola through the values at `lag - 1`, `lag` and
/// `lag + 1`. Neighbours outside `lags` are replaced by the value at `lag`.
///
/// Returns the lag of the parabola's vertex in (fractional) samples.
pub fn refine_lag(nsdf: &[f32], lags: LagRange, lag: usize) -> f32 {
    let x1 = nsdf[lag];
    let x0 = if lag > lags.min_tau { nsdf[lag - 1] } else { x1 };
    let x2 = if lag < lags.max_tau { nsdf[lag + 1] } else { x1 };

    // Parabola a * x^2 + b * x + c through (-1, x0), (0, x1), (1, x2).
    // The vertex is at x = -b / (2 * a).
    let denominator = x0 - 2.0 * x1 + x2;
    let shift = if denominator != 0.0 {
        0.5 * (x0 - x2) / denominator
    } else {
        0.0
    };
    (lag as f32) + shift
}

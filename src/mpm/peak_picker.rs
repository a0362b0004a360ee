use crate::mpm::nsdf::LagRange;

/// Local NSDF maxima must exceed this value to be considered
/// a pitch period candidate.
pub const PERIODICITY_THRESHOLD: f32 = 0.6;

/// An NSDF maximum at an integer lag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// The lag in samples.
    pub lag: usize,
    /// The NSDF value at `lag`.
    pub value: f32,
}

/// Selects the lag most likely to correspond to the pitch period.
///
/// Scans lags `min_tau + 1..max_tau` for strict local maxima above
/// [`PERIODICITY_THRESHOLD`] and returns the largest one, preferring the
/// smallest lag on ties. If there is no such maximum, the largest positive
/// value in the scanned range is returned instead. Returns `None` if the
/// scanned range contains no positive values.
pub fn pick_peak(nsdf: &[f32], lags: LagRange) -> Option<Peak> {
    assert!(lags.max_tau < nsdf.len());
    let scan_range = lags.min_tau + 1..lags.max_tau;

    let mut best: Option<Peak> = None;
    let mut best_value = PERIODICITY_THRESHOLD;
    for lag in scan_range.clone() {
        let value = nsdf[lag];
        let is_local_max = value > nsdf[lag - 1] && value > nsdf[lag + 1];
        if is_local_max && value > best_value {
            best_value = value;
            best = Some(Peak { lag, value });
        }
    }
    if best.is_some() {
        return best;
    }

    // No clear periodicity, fall back to the global maximum.
    let mut best_value = 0.0;
    for lag in scan_range {
        let value = nsdf[lag];
        if value > best_value {
            best_value = value;
            best = Some(Peak { lag, value });
        }
    }
    best
}

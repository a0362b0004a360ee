//! The normalized square difference function (NSDF), eq (9) in
//! [A smarter way to find pitch](http://www.cs.otago.ac.nz/tartini/papers/A_Smarter_Way_to_Find_Pitch.pdf).

use crate::common::{autocorr_fft, autocorr_fft_size, MAX_FFT_SIZE};
use crate::config::FrequencyRange;

/// The smallest lag ever considered.
pub const MIN_LAG: usize = 2;

/// The inclusive range of lags, in samples, the NSDF is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LagRange {
    pub min_tau: usize,
    pub max_tau: usize,
}

impl LagRange {
    /// Derives the lag range for a frequency range,
    /// `min_tau = max(2, floor(sample_rate / max))` and
    /// `max_tau = min(floor(sample_rate / min), frame_size - 1)`.
    /// Returns `None` unless `min_tau < max_tau`.
    pub fn new(sample_rate: f32, range: FrequencyRange, frame_size: usize) -> Option<LagRange> {
        let min_tau = lag_for_frequency(sample_rate, range.max).max(MIN_LAG);
        let max_tau = lag_for_frequency(sample_rate, range.min).min(frame_size.saturating_sub(1));
        if min_tau < max_tau {
            Some(LagRange { min_tau, max_tau })
        } else {
            None
        }
    }

    /// The number of lags from 0 up to and including `max_tau`.
    pub fn lag_count(&self) -> usize {
        self.max_tau + 1
    }
}

fn lag_for_frequency(sample_rate: f32, frequency: f32) -> usize {
    let lag = (sample_rate / frequency).floor();
    if lag.is_nan() || lag <= 0.0 {
        0
    } else {
        // Saturates for infinite lags
        lag as usize
    }
}

/// Computes the NSDF of `window` for the lags in `lags` by time domain summation.
/// `nsdf` is indexed by lag and must have room for `lags.max_tau`. Entries outside
/// the lag range are left untouched.
pub fn nsdf_direct(window: &[f32], lags: LagRange, nsdf: &mut [f32]) {
    assert!(lags.max_tau < window.len() && lags.max_tau < nsdf.len());
    for tau in lags.min_tau..=lags.max_tau {
        let mut ac: f32 = 0.0;
        let mut m: f32 = 0.0;
        for (x, y) in window.iter().zip(window[tau..].iter()) {
            ac += x * y;
            m += x * x + y * y;
        }
        nsdf[tau] = if m > 0.0 { 2.0 * ac / m } else { 0.0 };
    }
}

/// Returns true if the FFT accelerated NSDF supports a given frame size and lag range.
pub fn supports_fft(window_size: usize, lags: LagRange) -> bool {
    lags.lag_count() <= window_size
        && autocorr_fft_size(window_size, lags.lag_count()) <= MAX_FFT_SIZE
}

/// Computes the NSDF of `window` for lags `0..=lags.max_tau` using FFT accelerated
/// autocorrelation and incremental computation of m'. `fft_buffer` and `scratch_buffer`
/// must hold at least [`autocorr_fft_size`] elements. Returns `None` if the lag range
/// is not supported, see [`supports_fft`].
pub fn nsdf_fft(
    window: &[f32],
    lags: LagRange,
    nsdf: &mut [f32],
    fft_buffer: &mut [f32],
    scratch_buffer: &mut [f32],
) -> Option<()> {
    if !supports_fft(window.len(), lags) {
        return None;
    }
    let lag_count = lags.lag_count();
    let fft_size = autocorr_fft_size(window.len(), lag_count);
    let r_prime = &mut fft_buffer[..fft_size];
    autocorr_fft(window, r_prime, scratch_buffer, lag_count)?;

    // Compute m' and store it in the nsdf buffer
    let nsdf = &mut nsdf[..lag_count];
    m_prime_incremental(window, r_prime[0], nsdf);

    // Counterpart of the m > 0 rule in nsdf_direct. The incremental
    // subtraction leaves rounding residue where the true value of m' is zero,
    // so values within f32 precision of zero count as zero.
    let min_denominator = f32::EPSILON * nsdf[0];
    for (value, r) in nsdf.iter_mut().zip(r_prime.iter()) {
        let denominator = *value;
        *value = if denominator > min_denominator {
            2.0 * r / denominator
        } else {
            0.0
        };
    }
    Some(())
}

/// Computes m' defined in eq (6), using the incremental subtraction
/// algorithm described in section 6 - Efficient calculation of SDF.
fn m_prime_incremental(window: &[f32], autocorr_at_lag_0: f32, result: &mut [f32]) {
    let lag_count = result.len();
    let window_size = window.len();
    assert!(lag_count <= window_size, "Lag count must not be greater than the window size");

    result[0] = 2.0 * autocorr_at_lag_0;
    for i in 1..lag_count {
        let v1 = window[window_size - i];
        let v2 = window[i - 1];
        result[i] = result[i - 1] - v1 * v1 - v2 * v2;
    }
}

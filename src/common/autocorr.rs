use super::fft::{real_fft, MIN_FFT_SIZE};

/// Computes the length of the FFT needed to compute the autocorrelation
/// for a given window size and lag count to avoid circular convolution effects.
///
/// # Arguments
///
/// * `buffer_size` - The size of the input buffer.
/// * `lag_count` - The length of the computed autocorrelation.
pub fn autocorr_fft_size(buffer_size: usize, lag_count: usize) -> usize {
    assert!(lag_count <= buffer_size);
    let min_length = buffer_size + lag_count - 1;
    let mut result: usize = MIN_FFT_SIZE;
    while result < min_length {
        result <<= 1;
    }
    result
}

/// Computes the [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation)
/// of a given buffer using FFT. The first `lag_count` elements of `result`
/// hold the autocorrelation afterwards.
///
/// Returns `None`, leaving `result` unspecified, if the required FFT size is not supported.
///
/// # Arguments
///
/// * `buffer` - Input buffer
/// * `result` - A buffer of length [`autocorr_fft_size`] to write the result to.
/// * `scratch_buffer` - A scratch buffer used for temporary storage, at least as long as `result`.
/// * `lag_count` - The length of the computed autocorrelation.
pub fn autocorr_fft(
    buffer: &[f32],
    result: &mut [f32],
    scratch_buffer: &mut [f32],
    lag_count: usize,
) -> Option<()> {
    let fft_size = autocorr_fft_size(buffer.len(), lag_count);
    assert_eq!(result.len(), fft_size, "Unexpected autocorr fft buffer length");
    assert!(
        scratch_buffer.len() >= fft_size,
        "Autocorr fft scratch buffer must not be shorter than result buffer"
    );
    let scratch_buffer = &mut scratch_buffer[..fft_size];

    // Build the zero padded FFT input signal
    result[..buffer.len()].copy_from_slice(buffer);
    for element in result.iter_mut().skip(buffer.len()) {
        *element = 0.0
    }

    let fft = real_fft(result)?;

    // Power spectral density, mirrored to a full length real spectrum.
    scratch_buffer[0] = fft[0].re * fft[0].re;
    for (index, fft_value) in fft.iter().enumerate().skip(1) {
        let norm_sq = fft_value.norm_sqr();
        scratch_buffer[index] = norm_sq;
        scratch_buffer[fft_size - index] = norm_sq;
    }
    scratch_buffer[fft.len()] = fft[0].im * fft[0].im;

    // The PSD is real and symmetric, so a forward FFT gives the
    // autocorrelation up to a scaling factor.
    let ifft = real_fft(scratch_buffer)?;

    let scale = 1.0 / (fft_size as f32);
    for (result, ifft) in result.iter_mut().zip(ifft.iter()).take(lag_count) {
        *result = scale * ifft.re;
    }
    Some(())
}

/// Computes the [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation)
/// of a given buffer using time domain convolution.
pub fn autocorr_conv(window: &[f32], result: &mut [f32]) {
    assert!(
        window.len() >= result.len(),
        "Result vector must not be longer than the window."
    );

    for (tau, value) in result.iter_mut().enumerate() {
        let mut sum: f32 = 0.0;
        for (x, x_plus_tau) in window.iter().zip(window[tau..].iter()) {
            sum += x * x_plus_tau;
        }
        *value = sum;
    }
}

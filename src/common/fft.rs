use core::convert::TryInto;

/// The smallest FFT size supported by [`real_fft`].
pub const MIN_FFT_SIZE: usize = 16;
/// The largest FFT size supported by [`real_fft`].
pub const MAX_FFT_SIZE: usize = 4096;

macro_rules! rfft {
    ($func:path, $buffer:expr) => {
        &mut $func($buffer.try_into().ok()?)[..]
    };
}

/// Performs an in-place real FFT on a given buffer, returning the first half of
/// the spectrum. The value at the Nyquist frequency is packed into the imaginary
/// part of the DC bin. Returns `None` if the buffer length is not a power of two
/// between [`MIN_FFT_SIZE`] and [`MAX_FFT_SIZE`].
pub fn real_fft(buffer: &mut [f32]) -> Option<&mut [microfft::Complex32]> {
    let fft = match buffer.len() {
        16 => rfft!(microfft::real::rfft_16, buffer),
        32 => rfft!(microfft::real::rfft_32, buffer),
        64 => rfft!(microfft::real::rfft_64, buffer),
        128 => rfft!(microfft::real::rfft_128, buffer),
        256 => rfft!(microfft::real::rfft_256, buffer),
        512 => rfft!(microfft::real::rfft_512, buffer),
        1024 => rfft!(microfft::real::rfft_1024, buffer),
        2048 => rfft!(microfft::real::rfft_2048, buffer),
        4096 => rfft!(microfft::real::rfft_4096, buffer),
        _ => return None,
    };
    Some(fft)
}

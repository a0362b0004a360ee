//! Common algorithms and utilities.

mod autocorr;
mod f32_array_ext;
mod fft;
mod midi;
mod window_function;

pub use autocorr::{autocorr_conv, autocorr_fft, autocorr_fft_size};
pub use f32_array_ext::F32ArrayExt;
pub use fft::{real_fft, MAX_FFT_SIZE, MIN_FFT_SIZE};
pub use midi::freq_to_midi_note;
pub use window_function::hann_window;

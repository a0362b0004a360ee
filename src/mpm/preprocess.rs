use crate::common::{hann_window, F32ArrayExt};

/// Frames with a windowed RMS level below this value are considered silent
/// and are not analyzed further.
pub const SILENCE_RMS_THRESHOLD: f32 = 0.005;

/// Removes DC offset and applies a Hann window to frames of a fixed size.
pub struct Preprocessor {
    hann: Box<[f32]>,
}

impl Preprocessor {
    pub fn new(frame_size: usize) -> Self {
        let mut hann = vec![0.; frame_size].into_boxed_slice();
        hann_window(&mut hann);
        Preprocessor { hann }
    }

    /// Subtracts the mean from `frame` and multiplies it by the Hann window in place.
    /// Returns the RMS level of the windowed frame.
    pub fn process(&self, frame: &mut [f32]) -> f32 {
        assert_eq!(frame.len(), self.hann.len(), "Unexpected frame length");
        let mean = frame.mean();
        for (sample, window_value) in frame.iter_mut().zip(self.hann.iter()) {
            *sample = (*sample - mean) * window_value;
        }
        frame.rms_level()
    }
}

/// Returns true if a frame with the given windowed RMS level should not be analyzed.
pub fn is_silent(rms: f32) -> bool {
    rms < SILENCE_RMS_THRESHOLD
}

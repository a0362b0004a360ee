//! Error types.

use thiserror::Error;

/// Result type for fallible detector operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported at the public boundary of the crate. Degenerate audio never
/// produces an error; it produces an estimate without a frequency.
#[derive(Error, Debug)]
pub enum Error {
    /// The sample rate is not a finite, positive number.
    #[error("Invalid sample rate {0} Hz")]
    InvalidSampleRate(f32),

    /// The frame is too short to hold the minimum lag range.
    #[error("Frame size must be at least {min}, got {actual}")]
    InvalidFrameSize { min: usize, actual: usize },

    /// The frequency bounds are non-finite, non-positive or not increasing.
    #[error("Invalid frequency range [{min}, {max}] Hz")]
    InvalidFrequencyRange { min: f32, max: f32 },

    /// The control queue has no room for another update.
    #[error("Control queue is full, dropped update")]
    ControlQueueFull,

    /// JSON encoding of an event or decoding of a configuration failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

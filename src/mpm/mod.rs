//! Streaming pitch detection using the MPM [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29)
//! detection algorithm.
//!
//! A frame passes through the following stages
//! * [`FrameAccumulator`] collects incoming blocks into frames
//! * [`Preprocessor`] removes DC, applies a Hann window and gates silence
//! * The NSDF is computed for the lags in the current frequency range
//! * [`pick_peak`] selects the lag most likely to be the pitch period
//! * [`refine_lag`] refines the lag using parabolic interpolation
//! * [`EmissionPolicy`] decides whether the resulting estimate is reported
//!
//! [`PitchDetector`] ties the stages together, [`Analyzer`] runs them on a single frame.
//!
//! # A note on confidence
//! The confidence of an estimate is the NSDF value at the selected lag. When no
//! NSDF maximum exceeds [`PERIODICITY_THRESHOLD`], the global maximum is used,
//! so noisy input may still produce a pitch with low confidence. Consumers that
//! only want clear tones should compare the confidence to a threshold of their own.

mod accumulator;
mod analyzer;
mod detector;
mod emission;
mod estimate;
mod interpolation;
mod nsdf;
mod peak_picker;
mod preprocess;

pub use accumulator::FrameAccumulator;
pub use analyzer::Analyzer;
pub use detector::PitchDetector;
pub use emission::{EmissionPolicy, LIVENESS_INTERVAL, LIVENESS_RMS_THRESHOLD};
pub use estimate::PitchEstimate;
pub use interpolation::refine_lag;
pub use nsdf::{nsdf_direct, nsdf_fft, supports_fft, LagRange, MIN_LAG};
pub use peak_picker::{pick_peak, Peak, PERIODICITY_THRESHOLD};
pub use preprocess::{is_silent, Preprocessor, SILENCE_RMS_THRESHOLD};

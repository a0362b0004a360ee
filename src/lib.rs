//! Real time pitch tracking of a streaming mono audio signal using the MPM
//! (McLeod Pitch Method), described in the paper
//! [A smarter way to find pitch](http://www.cs.otago.ac.nz/tartini/papers/A_Smarter_Way_to_Find_Pitch.pdf)
//! by Philip McLeod and Geoff Wyvill. The algorithm is used for detecting pitch in monophonic,
//! primarily musical, sounds such as a single voice. It cannot be used to detect multiple pitches
//! at once, like in a musical chord.
//!
//! Features
//! * Accepts input blocks of arbitrary size, typically 128 sample render quanta.
//! * Analyzes non-overlapping frames of a fixed size.
//! * No allocations after creation, suitable for real time audio use.
//! * Lock free configuration updates from other threads, applied at frame boundaries.
//! * Optional FFT accelerated NSDF computation.
//!
//! # Examples
//!
//! ```
//! use mpm_stream::{DetectorConfig, PitchDetector};
//!
//! // Create an input buffer containing a pure tone at 220 Hz.
//! let sample_rate = 48000.0;
//! let sine_frequency = 220.0;
//! let mut signal: Vec<f32> = vec![0.0; 4096];
//! for i in 0..signal.len() {
//!     let sine_value = (2.0 * core::f32::consts::PI * sine_frequency * (i as f32) / sample_rate).sin();
//!     signal[i] = 0.5 * sine_value;
//! }
//!
//! // Create a pitch detector analyzing frames of 2048 samples
//! let mut detector = PitchDetector::new(DetectorConfig::new(sample_rate)).unwrap();
//!
//! // Feed the signal in 128 sample blocks. A frame is analyzed every 16th block.
//! for block in signal.chunks(128) {
//!     if let Some(estimate) = detector.process_block(block) {
//!         let frequency = estimate.frequency.unwrap();
//!         println!("t = {} s, {} Hz, confidence {}", estimate.timestamp, frequency, estimate.confidence);
//!         assert!((frequency - sine_frequency).abs() <= 2.0);
//!     }
//! }
//! assert_eq!(detector.processed_frame_count(), 2);
//! ```
//!
//! Configuration updates may be sent from another thread through a control queue
//! ```
//! use mpm_stream::PitchDetector;
//!
//! let mut detector = PitchDetector::from_sample_rate(44100.0).unwrap();
//! let mut control = detector.connect_control(8);
//! let accepted = control
//!     .send_message(r#"{"type": "config", "minFreq": 100, "maxFreq": 800}"#)
//!     .unwrap();
//! assert!(accepted);
//!
//! // Applied at the start of the next frame
//! detector.process_block(&[0.0; 2048]);
//! assert_eq!(detector.frequency_range().min, 100.0);
//! assert_eq!(detector.frequency_range().max, 800.0);
//! ```

pub mod common;
pub mod config;
pub mod control;
pub mod error;
pub mod message;
pub mod mpm;

pub use config::{DetectorConfig, FrequencyRange, NsdfMethod};
pub use control::{ConfigUpdate, ControlSender};
pub use error::{Error, Result};
pub use mpm::{PitchDetector, PitchEstimate};

//! Detector configuration.

use serde::Deserialize;

use crate::error::{Error, Result};

/// The default lower frequency bound in Hz.
pub const DEFAULT_MIN_FREQUENCY: f32 = 70.0;
/// The default upper frequency bound in Hz. Covers the vocal range.
pub const DEFAULT_MAX_FREQUENCY: f32 = 1000.0;
/// The default number of samples per analyzed frame.
pub const DEFAULT_FRAME_SIZE: usize = 2048;
/// The default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: f32 = 48000.0;
/// The smallest frame able to hold a lag range with `2 <= min_tau < max_tau <= frame_size - 1`.
pub const MIN_FRAME_SIZE: usize = 4;

/// Selects how the normalized square difference function is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NsdfMethod {
    /// Time domain summation over each lag.
    Direct,
    /// Autocorrelation by real FFT and incremental computation of the
    /// normalization term. Falls back to `Direct` for frames too large for
    /// the supported FFT sizes.
    Fft,
}

impl Default for NsdfMethod {
    fn default() -> Self {
        NsdfMethod::Direct
    }
}

/// The frequency bounds a frame is analyzed with. Snapshotted once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    /// Lowest reportable frequency in Hz.
    pub min: f32,
    /// Highest reportable frequency in Hz.
    pub max: f32,
}

impl FrequencyRange {
    pub fn new(min: f32, max: f32) -> Self {
        FrequencyRange { min, max }
    }

    /// Returns true if `frequency` lies within the bounds (inclusive).
    pub fn contains(&self, frequency: f32) -> bool {
        frequency >= self.min && frequency <= self.max
    }

    fn validate(&self) -> Result<()> {
        let is_valid_bound = |f: f32| f.is_finite() && f > 0.0;
        if !is_valid_bound(self.min) || !is_valid_bound(self.max) || self.min >= self.max {
            return Err(Error::InvalidFrequencyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for FrequencyRange {
    fn default() -> Self {
        FrequencyRange::new(DEFAULT_MIN_FREQUENCY, DEFAULT_MAX_FREQUENCY)
    }
}

/// Construction parameters of a [`PitchDetector`](crate::mpm::PitchDetector).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    /// The audio sample rate in Hz. Fixed for the lifetime of a detector.
    pub sample_rate: f32,
    /// Initial lower frequency bound in Hz (default: 70)
    pub min_frequency: f32,
    /// Initial upper frequency bound in Hz (default: 1000)
    pub max_frequency: f32,
    /// Number of samples per analyzed frame (default: 2048)
    pub frame_size: usize,
    /// NSDF implementation (default: direct summation)
    pub nsdf_method: NsdfMethod,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            max_frequency: DEFAULT_MAX_FREQUENCY,
            frame_size: DEFAULT_FRAME_SIZE,
            nsdf_method: NsdfMethod::default(),
        }
    }
}

impl DetectorConfig {
    /// Default configuration for a given sample rate.
    pub fn new(sample_rate: f32) -> Self {
        DetectorConfig {
            sample_rate,
            ..DetectorConfig::default()
        }
    }

    /// Parses a configuration from JSON, e.g
    /// `{"sampleRate": 44100, "frameSize": 1024, "nsdfMethod": "fft"}`.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DetectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn frequency_range(&self) -> FrequencyRange {
        FrequencyRange::new(self.min_frequency, self.max_frequency)
    }

    /// Checks that the configuration describes a usable detector.
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if self.frame_size < MIN_FRAME_SIZE {
            return Err(Error::InvalidFrameSize {
                min: MIN_FRAME_SIZE,
                actual: self.frame_size,
            });
        }
        self.frequency_range().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.min_frequency, 70.0);
        assert_eq!(config.max_frequency, 1000.0);
        assert_eq!(config.frame_size, 2048);
        assert_eq!(config.nsdf_method, NsdfMethod::Direct);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let mut config = DetectorConfig::new(0.0);
        assert!(matches!(config.validate(), Err(Error::InvalidSampleRate(_))));

        config = DetectorConfig::new(44100.0);
        config.frame_size = 3;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidFrameSize { min: 4, actual: 3 })
        ));

        config = DetectorConfig::new(44100.0);
        config.min_frequency = 500.0;
        config.max_frequency = 500.0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidFrequencyRange { .. })
        ));

        config.min_frequency = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json() {
        let config =
            DetectorConfig::from_json(r#"{"sampleRate": 44100, "frameSize": 1024, "nsdfMethod": "fft"}"#)
                .unwrap();
        assert_eq!(config.sample_rate, 44100.0);
        assert_eq!(config.frame_size, 1024);
        assert_eq!(config.nsdf_method, NsdfMethod::Fft);
        assert_eq!(config.min_frequency, DEFAULT_MIN_FREQUENCY);

        assert!(DetectorConfig::from_json(r#"{"minFreq": 1}"#).is_ok());
        assert!(DetectorConfig::from_json(r#"{"minFrequency": 2000}"#).is_err());
        assert!(DetectorConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_frequency_range_contains() {
        let range = FrequencyRange::new(70.0, 1000.0);
        assert!(range.contains(70.0));
        assert!(range.contains(1000.0));
        assert!(!range.contains(69.9));
        assert!(!range.contains(1000.1));
    }
}

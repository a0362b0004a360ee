use crate::config::{DetectorConfig, FrequencyRange};
use crate::control::{control_channel, ControlReceiver, ControlSender};
use crate::error::Result;
use crate::mpm::accumulator::FrameAccumulator;
use crate::mpm::analyzer::Analyzer;
use crate::mpm::emission::EmissionPolicy;
use crate::mpm::estimate::PitchEstimate;
use crate::mpm::nsdf::LagRange;

/// * Collects input samples into fixed size frames
/// * Applies pending configuration updates at the start of each frame
/// * Performs pitch detection on each newly filled frame
/// * Decides which estimates to report
///
/// All memory is allocated on creation, processing does not allocate.
pub struct PitchDetector {
    /// The audio sample rate in Hz.
    sample_rate: f32,
    /// The frequency range used for the next frame.
    frequency_range: FrequencyRange,
    accumulator: FrameAccumulator,
    analyzer: Analyzer,
    emission_policy: EmissionPolicy,
    control: Option<ControlReceiver>,
    /// The total number of samples passed to the detector.
    received_sample_count: u64,
    last_estimate: Option<PitchEstimate>,
}

impl PitchDetector {
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "Creating pitch detector: {} Hz, frame size {}, {}-{} Hz, {:?} NSDF, lags {:?}",
            config.sample_rate,
            config.frame_size,
            config.min_frequency,
            config.max_frequency,
            config.nsdf_method,
            LagRange::new(config.sample_rate, config.frequency_range(), config.frame_size)
        );

        Ok(PitchDetector {
            sample_rate: config.sample_rate,
            frequency_range: config.frequency_range(),
            accumulator: FrameAccumulator::new(config.frame_size),
            analyzer: Analyzer::new(config.frame_size, config.nsdf_method),
            emission_policy: EmissionPolicy::new(),
            control: None,
            received_sample_count: 0,
            last_estimate: None,
        })
    }

    /// Creates a detector with default settings for a given sample rate.
    pub fn from_sample_rate(sample_rate: f32) -> Result<Self> {
        PitchDetector::new(DetectorConfig::new(sample_rate))
    }

    /// Processes a block of samples of arbitrary length. A block completes at
    /// most one frame, so at most one estimate is reported per block.
    pub fn process_block(&mut self, samples: &[f32]) -> Option<PitchEstimate> {
        let sample_rate = self.sample_rate;
        let block_start = self.received_sample_count;
        let frequency_range = &mut self.frequency_range;
        let control = &mut self.control;
        let analyzer = &mut self.analyzer;
        let emission_policy = &mut self.emission_policy;
        let last_estimate = &mut self.last_estimate;

        let mut reported = None;
        self.accumulator.push(samples, |consumed, frame| {
            // The frame sees one consistent configuration snapshot
            if let Some(control) = control.as_mut() {
                control.apply_pending(frequency_range);
            }

            let timestamp = ((block_start + consumed as u64) as f64) / (sample_rate as f64);
            let estimate = analyzer.analyze(frame, sample_rate, *frequency_range, timestamp);
            *last_estimate = Some(estimate);
            if emission_policy.should_emit(&estimate) {
                reported = Some(estimate);
            }
        });
        self.received_sample_count += samples.len() as u64;

        reported
    }

    /// Callback flavour of [`process_block`](PitchDetector::process_block) for
    /// use in audio callbacks. `handler` is invoked for each reported estimate.
    /// Always returns true, i.e keep processing.
    pub fn process<F>(&mut self, samples: &[f32], mut handler: F) -> bool
    where
        F: FnMut(&PitchEstimate),
    {
        if let Some(estimate) = self.process_block(samples) {
            handler(&estimate);
        }
        true
    }

    /// Creates a control queue with room for `capacity` pending updates and
    /// returns its sending end. Replaces any previously connected queue.
    pub fn connect_control(&mut self, capacity: usize) -> ControlSender {
        let (sender, receiver) = control_channel(capacity);
        self.control = Some(receiver);
        sender
    }

    /// Sets the frequency range used from the next frame on.
    pub fn set_frequency_range(&mut self, range: FrequencyRange) {
        self.frequency_range = range;
    }

    /// Returns the frequency range used for the next frame, not including
    /// updates still pending in the control queue.
    pub fn frequency_range(&self) -> FrequencyRange {
        self.frequency_range
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Returns the fixed number of samples in a frame.
    pub fn frame_size(&self) -> usize {
        self.accumulator.frame_size()
    }

    /// Returns the number of analyzed frames since the
    /// detector was created.
    pub fn processed_frame_count(&self) -> u64 {
        self.emission_policy.completed_frame_count()
    }

    /// Returns the number of samples buffered towards the next frame.
    pub fn buffered_sample_count(&self) -> usize {
        self.accumulator.write_index()
    }

    /// Returns the estimate of the most recently analyzed frame, whether
    /// it was reported or not.
    pub fn last_estimate(&self) -> Option<&PitchEstimate> {
        self.last_estimate.as_ref()
    }

    /// Returns the NSDF of the most recently analyzed frame over its lag range.
    pub fn nsdf(&self) -> &[f32] {
        self.analyzer.nsdf()
    }

    /// Returns the lag range of the most recently computed NSDF.
    pub fn lag_range(&self) -> Option<LagRange> {
        self.analyzer.lag_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ConfigUpdate;

    fn generate_sine(sample_rate: f32, frequency: f32, sample_count: usize) -> Vec<f32> {
        let mut window: Vec<f32> = vec![0.0; sample_count];
        for i in 0..sample_count {
            let sine_value =
                0.5 * (2.0 * core::f32::consts::PI * frequency * (i as f32) / sample_rate).sin();
            window[i] = sine_value;
        }
        return window;
    }

    #[test]
    fn test_sine_detection() {
        let sample_rate = 48000.0;
        let frequency = 220.0;
        let input = generate_sine(sample_rate, frequency, 2048);
        let mut detector = PitchDetector::from_sample_rate(sample_rate).unwrap();

        let estimate = detector.process_block(&input).unwrap();
        assert!((estimate.frequency.unwrap() - frequency).abs() <= 2.0);
        assert!(estimate.confidence > 0.6);
        assert!(estimate.rms > 0.0);
        assert_eq!(estimate.timestamp, 2048.0 / 48000.0);
        assert_eq!(detector.processed_frame_count(), 1);
        assert_eq!(detector.buffered_sample_count(), 0);
    }

    #[test]
    fn test_quantum_sized_blocks() {
        let sample_rate = 44100.0;
        let input = generate_sine(sample_rate, 330.0, 3 * 2048);
        let mut detector = PitchDetector::from_sample_rate(sample_rate).unwrap();

        let mut timestamps = Vec::new();
        for (block_index, block) in input.chunks(128).enumerate() {
            let keep_running = detector.process(block, |estimate| {
                assert!((estimate.frequency.unwrap() - 330.0).abs() / 330.0 <= 0.01);
                timestamps.push(estimate.timestamp);
            });
            assert!(keep_running);
            // Frames complete on every 16th block
            assert_eq!(detector.processed_frame_count() as usize, (block_index + 1) / 16);
        }
        assert_eq!(timestamps, vec![2048.0 / 44100.0, 4096.0 / 44100.0, 6144.0 / 44100.0]);
    }

    #[test]
    fn test_oversized_block() {
        // One frame is analyzed, one frame is carried and the rest is dropped
        let mut detector = PitchDetector::from_sample_rate(48000.0).unwrap();
        let input = generate_sine(48000.0, 440.0, 5000);
        assert!(detector.process_block(&input).is_some());
        assert_eq!(detector.processed_frame_count(), 1);
        assert_eq!(detector.buffered_sample_count(), 2048);

        // The carried frame is complete and gets analyzed by the next block
        assert!(detector.process_block(&[]).is_some());
        assert_eq!(detector.processed_frame_count(), 2);
        assert_eq!(detector.buffered_sample_count(), 0);
    }

    #[test]
    fn test_silence_is_not_reported() {
        let mut detector = PitchDetector::from_sample_rate(48000.0).unwrap();
        for _ in 0..8 {
            assert!(detector.process_block(&[0.0; 2048]).is_none());
        }
        assert_eq!(detector.processed_frame_count(), 8);
        let estimate = detector.last_estimate().unwrap();
        assert_eq!(estimate.frequency, None);
        assert_eq!(estimate.confidence, 0.0);
        assert_eq!(estimate.rms, 0.0);
        assert!(detector.nsdf().is_empty());
    }

    #[test]
    fn test_control_updates_apply_at_frame_start() {
        let sample_rate = 48000.0;
        let input = generate_sine(sample_rate, 440.0, 2048);
        let mut detector = PitchDetector::from_sample_rate(sample_rate).unwrap();
        let mut sender = detector.connect_control(8);

        // Half a frame, then an update excluding 440 Hz
        assert!(detector.process_block(&input[..1024]).is_none());
        sender
            .send(ConfigUpdate {
                min_frequency: Some(600.0),
                max_frequency: None,
            })
            .unwrap();
        // Not applied until the frame completes
        assert_eq!(detector.frequency_range().min, 70.0);

        // The frame in progress is analyzed with the new range. 440 Hz is
        // outside it, and the unpitched estimate is reported as frame 0.
        let estimate = detector.process_block(&input[1024..]).unwrap();
        assert_eq!(detector.frequency_range().min, 600.0);
        assert_eq!(estimate.frequency, None);
        assert_eq!(estimate.confidence, 0.0);
    }

    #[test]
    fn test_control_messages() {
        let sample_rate = 48000.0;
        let input = generate_sine(sample_rate, 440.0, 2048);
        let mut detector = PitchDetector::from_sample_rate(sample_rate).unwrap();
        let mut sender = detector.connect_control(8);

        assert!(sender
            .send_message(r#"{"type": "config", "minFreq": 500, "maxFreq": 1500}"#)
            .unwrap());
        assert!(!sender.send_message(r#"{"type": "config", "minFreq": "x"}"#).unwrap());
        detector.process_block(&input);
        assert_eq!(detector.frequency_range(), FrequencyRange::new(500.0, 1500.0));
    }

    #[test]
    fn test_negative_bound_makes_frames_unpitched() {
        let sample_rate = 48000.0;
        let input = generate_sine(sample_rate, 440.0, 4096);
        let mut detector = PitchDetector::from_sample_rate(sample_rate).unwrap();
        let mut sender = detector.connect_control(8);

        assert!(detector.process_block(&input[..2048]).unwrap().is_pitched());
        assert!(sender.send_message(r#"{"type":"config","minFreq":-80}"#).unwrap());

        // Frame 1 is unpitched and not a liveness frame, so nothing is reported
        assert!(detector.process_block(&input[2048..]).is_none());
        assert_eq!(detector.frequency_range().min, -80.0);
        let estimate = detector.last_estimate().unwrap();
        assert_eq!(estimate.frequency, None);
        assert_eq!(estimate.confidence, 0.0);
        assert!(estimate.rms > 0.0);
        assert!(detector.lag_range().is_none());
    }

    #[test]
    fn test_set_frequency_range() {
        let sample_rate = 48000.0;
        let mut detector = PitchDetector::from_sample_rate(sample_rate).unwrap();
        detector.set_frequency_range(FrequencyRange::new(100.0, 400.0));
        assert!(detector.process_block(&generate_sine(sample_rate, 220.0, 2048)).is_some());
        assert_eq!(
            detector.lag_range(),
            Some(LagRange {
                min_tau: 120,
                max_tau: 480
            })
        );
        assert_eq!(detector.nsdf().len(), 361);
        assert_eq!(detector.sample_rate(), sample_rate);
        assert_eq!(detector.frame_size(), 2048);
    }

    #[test]
    fn test_independent_instances() {
        let sample_rate = 48000.0;
        let mut low = PitchDetector::from_sample_rate(sample_rate).unwrap();
        let mut high = PitchDetector::from_sample_rate(sample_rate).unwrap();
        let low_estimate = low.process_block(&generate_sine(sample_rate, 220.0, 2048)).unwrap();
        let high_estimate = high.process_block(&generate_sine(sample_rate, 660.0, 2048)).unwrap();
        assert!((low_estimate.frequency.unwrap() - 220.0).abs() <= 2.0);
        assert!((high_estimate.frequency.unwrap() - 660.0).abs() <= 6.6);
    }

    #[test]
    fn test_invalid_config() {
        assert!(PitchDetector::from_sample_rate(-1.0).is_err());
        let mut config = DetectorConfig::new(48000.0);
        config.frame_size = 2;
        assert!(PitchDetector::new(config).is_err());
    }
}

use crate::mpm::estimate::PitchEstimate;

/// Unpitched frames louder than this are reported periodically.
pub const LIVENESS_RMS_THRESHOLD: f32 = 0.01;
/// Every n:th completed frame may report an unpitched estimate.
pub const LIVENESS_INTERVAL: u64 = 4;

/// Decides which estimates are reported.
///
/// * Pitched estimates are always reported.
/// * Unpitched estimates with an RMS level above [`LIVENESS_RMS_THRESHOLD`] are
///   reported for every [`LIVENESS_INTERVAL`]:th completed frame, counting
///   from the first one.
/// * Other estimates are never reported.
#[derive(Debug, Default)]
pub struct EmissionPolicy {
    completed_frame_count: u64,
}

impl EmissionPolicy {
    pub fn new() -> Self {
        EmissionPolicy::default()
    }

    /// Decides whether the estimate of a newly completed frame should be reported.
    /// Must be called exactly once per completed frame.
    pub fn should_emit(&mut self, estimate: &PitchEstimate) -> bool {
        let frame_index = self.completed_frame_count;
        self.completed_frame_count += 1;

        if estimate.is_pitched() {
            true
        } else if estimate.rms > LIVENESS_RMS_THRESHOLD {
            frame_index % LIVENESS_INTERVAL == 0
        } else {
            false
        }
    }

    /// The number of frames passed to [`should_emit`](EmissionPolicy::should_emit).
    pub fn completed_frame_count(&self) -> u64 {
        self.completed_frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitched() -> PitchEstimate {
        PitchEstimate {
            frequency: Some(220.0),
            confidence: 0.9,
            rms: 0.001,
            timestamp: 0.0,
        }
    }

    #[test]
    fn test_pitched_estimates_are_always_emitted() {
        let mut policy = EmissionPolicy::new();
        for _ in 0..10 {
            assert!(policy.should_emit(&pitched()));
        }
        assert_eq!(policy.completed_frame_count(), 10);
    }

    #[test]
    fn test_noisy_unpitched_estimates_are_downsampled() {
        let mut policy = EmissionPolicy::new();
        let noisy = PitchEstimate::unpitched(0.05, 0.0);
        let emitted: Vec<bool> = (0..9).map(|_| policy.should_emit(&noisy)).collect();
        assert_eq!(
            emitted,
            vec![true, false, false, false, true, false, false, false, true]
        );
    }

    #[test]
    fn test_counter_includes_pitched_frames() {
        let mut policy = EmissionPolicy::new();
        let noisy = PitchEstimate::unpitched(0.05, 0.0);
        assert!(policy.should_emit(&pitched())); // frame 0
        assert!(!policy.should_emit(&noisy)); // frame 1
        assert!(policy.should_emit(&pitched())); // frame 2
        assert!(!policy.should_emit(&noisy)); // frame 3
        assert!(policy.should_emit(&noisy)); // frame 4
    }

    #[test]
    fn test_quiet_unpitched_estimates_are_never_emitted() {
        let mut policy = EmissionPolicy::new();
        for rms in [0.0, 0.005, 0.01].iter() {
            assert!(!policy.should_emit(&PitchEstimate::unpitched(*rms, 0.0)));
        }
        assert!(!policy.should_emit(&PitchEstimate::unpitched(0.0, 0.0)));
        // Frame 4 would be emitted if it were louder than the threshold
        assert!(!policy.should_emit(&PitchEstimate::unpitched(0.01, 0.0)));
    }
}

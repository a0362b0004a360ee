use crate::common::{autocorr_fft_size, MAX_FFT_SIZE};
use crate::config::{FrequencyRange, NsdfMethod};
use crate::mpm::estimate::PitchEstimate;
use crate::mpm::interpolation::refine_lag;
use crate::mpm::nsdf::{nsdf_direct, nsdf_fft, LagRange};
use crate::mpm::peak_picker::pick_peak;
use crate::mpm::preprocess::{is_silent, Preprocessor};

/// Performs pitch detection on single frames. Holds all buffers needed
/// for the analysis, which are allocated once on creation.
pub struct Analyzer {
    nsdf_method: NsdfMethod,
    preprocessor: Preprocessor,
    /// The most recently analyzed frame, DC-removed and windowed.
    window: Box<[f32]>,
    /// The normalized square difference function, indexed by lag.
    nsdf: Box<[f32]>,
    /// The lags the NSDF was evaluated over for the most recent frame. `None`
    /// if the frame was silent or the frequency range gave no usable lags.
    lags: Option<LagRange>,
    fft_buffer: Box<[f32]>,
    fft_scratch_buffer: Box<[f32]>,
}

impl Analyzer {
    pub fn new(frame_size: usize, nsdf_method: NsdfMethod) -> Self {
        let fft_buffer_size = match nsdf_method {
            NsdfMethod::Direct => 0,
            // Room for the largest lag range a frame can have
            NsdfMethod::Fft => autocorr_fft_size(frame_size, frame_size).min(MAX_FFT_SIZE),
        };
        Analyzer {
            nsdf_method,
            preprocessor: Preprocessor::new(frame_size),
            window: vec![0.; frame_size].into_boxed_slice(),
            nsdf: vec![0.; frame_size].into_boxed_slice(),
            lags: None,
            fft_buffer: vec![0.; fft_buffer_size].into_boxed_slice(),
            fft_scratch_buffer: vec![0.; fft_buffer_size].into_boxed_slice(),
        }
    }

    pub fn frame_size(&self) -> usize {
        self.window.len()
    }

    pub fn nsdf_method(&self) -> NsdfMethod {
        self.nsdf_method
    }

    /// The DC-removed, windowed version of the most recently analyzed frame.
    pub fn window(&self) -> &[f32] {
        &self.window
    }

    /// The lag range of the most recent NSDF, if one was computed.
    pub fn lag_range(&self) -> Option<LagRange> {
        self.lags
    }

    /// The NSDF of the most recently analyzed frame for lags
    /// `min_tau..=max_tau`. Empty if no NSDF was computed.
    pub fn nsdf(&self) -> &[f32] {
        match self.lags {
            Some(lags) => &self.nsdf[lags.min_tau..=lags.max_tau],
            None => &[],
        }
    }

    /// Estimates the pitch of `frame`.
    ///
    /// # Arguments
    ///
    /// * `frame` - A complete frame of [`frame_size`](Analyzer::frame_size) samples.
    /// * `sample_rate` - The sample rate in Hz.
    /// * `range` - The frequency range to look for a pitch in.
    /// * `timestamp` - The stream time of the frame, passed through to the estimate.
    pub fn analyze(
        &mut self,
        frame: &[f32],
        sample_rate: f32,
        range: FrequencyRange,
        timestamp: f64,
    ) -> PitchEstimate {
        self.window.copy_from_slice(frame);
        self.lags = None;

        let rms = self.preprocessor.process(&mut self.window);
        if is_silent(rms) {
            return PitchEstimate::unpitched(rms, timestamp);
        }

        let lags = match LagRange::new(sample_rate, range, self.window.len()) {
            Some(lags) => lags,
            None => return PitchEstimate::unpitched(rms, timestamp),
        };
        self.compute_nsdf(lags);
        self.lags = Some(lags);

        let peak = match pick_peak(&self.nsdf, lags) {
            Some(peak) => peak,
            None => return PitchEstimate::unpitched(rms, timestamp),
        };

        let frequency = sample_rate / refine_lag(&self.nsdf, lags, peak.lag);
        if !range.contains(frequency) {
            return PitchEstimate::unpitched(rms, timestamp);
        }

        PitchEstimate {
            frequency: Some(frequency),
            confidence: peak.value.max(0.0).min(1.0),
            rms,
            timestamp,
        }
    }

    fn compute_nsdf(&mut self, lags: LagRange) {
        if self.nsdf_method == NsdfMethod::Fft {
            let computed = nsdf_fft(
                &self.window,
                lags,
                &mut self.nsdf,
                &mut self.fft_buffer,
                &mut self.fft_scratch_buffer,
            );
            if computed.is_some() {
                return;
            }
        }
        nsdf_direct(&self.window, lags, &mut self.nsdf);
    }
}

use serde::Serialize;

use crate::common::freq_to_midi_note;

/// The pitch estimate of one analyzed frame.
///
/// Serializes to the event message
/// `{"type": "pitch", "freq": number | null, "confidence": number, "rms": number, "ts": number}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "pitch")]
pub struct PitchEstimate {
    /// The estimated pitch frequency in Hz, if the frame has a discernable
    /// pitch within the configured frequency range.
    #[serde(rename = "freq")]
    pub frequency: Option<f32>,
    /// The NSDF value at the selected lag, clamped to [0, 1]. Values close to 1
    /// indicate a strongly periodic signal. Always 0 if `frequency` is `None`.
    pub confidence: f32,
    /// The RMS level of the DC-removed, windowed frame.
    pub rms: f32,
    /// Stream time in seconds of the sample that completed the frame.
    #[serde(rename = "ts")]
    pub timestamp: f64,
}

impl PitchEstimate {
    /// An estimate without a pitch.
    pub fn unpitched(rms: f32, timestamp: f64) -> Self {
        PitchEstimate {
            frequency: None,
            confidence: 0.0,
            rms,
            timestamp,
        }
    }

    /// Indicates if the estimate has a frequency.
    pub fn is_pitched(&self) -> bool {
        self.frequency.is_some()
    }

    /// The [MIDI note number](https://newt.phys.unsw.edu.au/jw/notes.html), with a
    /// fractional part, corresponding to the estimated frequency.
    pub fn midi_note_number(&self) -> Option<f32> {
        self.frequency.map(freq_to_midi_note)
    }
}

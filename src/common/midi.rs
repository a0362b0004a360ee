/// Converts a frequency in Hz to a [MIDI](https://en.wikipedia.org/wiki/MIDI) note number (with a fractional part).
/// A4 at 440 Hz is note 69.
pub fn freq_to_midi_note(freq: f32) -> f32 {
    12.0 * (freq / 440.0).log2() + 69.0
}

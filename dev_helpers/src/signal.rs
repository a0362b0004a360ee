use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A sine wave with a given frequency and amplitude, starting at phase zero.
pub fn sine(sample_rate: f32, frequency: f32, amplitude: f32, sample_count: usize) -> Vec<f32> {
    sine_with_offset(sample_rate, frequency, amplitude, 0.0, sample_count)
}

/// A sine wave on top of a constant DC offset.
pub fn sine_with_offset(
    sample_rate: f32,
    frequency: f32,
    amplitude: f32,
    offset: f32,
    sample_count: usize,
) -> Vec<f32> {
    (0..sample_count)
        .map(|i| {
            // Phase in f64 to keep long signals accurate
            let phase = 2.0 * std::f64::consts::PI * (frequency as f64) * (i as f64) / (sample_rate as f64);
            offset + amplitude * (phase.sin() as f32)
        })
        .collect()
}

/// Uniform white noise in `[-amplitude, amplitude)`. The same seed always
/// produces the same signal.
pub fn white_noise(amplitude: f32, sample_count: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..sample_count)
        .map(|_| amplitude * rng.gen_range(-1.0f32..1.0))
        .collect()
}

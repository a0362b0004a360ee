//! [Window functions](https://en.wikipedia.org/wiki/Window_function).

use core::f64::consts::PI;

/// Fills `buffer` with the coefficients of a symmetric
/// [Hann window](https://en.wikipedia.org/wiki/Window_function#Hann_and_Hamming_windows),
/// `0.5 * (1 - cos(2 * pi * i / (N - 1)))`.
pub fn hann_window(buffer: &mut [f32]) {
    let len = buffer.len();
    if len < 2 {
        for value in buffer.iter_mut() {
            *value = 1.0;
        }
        return;
    }

    let dx = 2.0 * PI / ((len - 1) as f64);
    for (i, value) in buffer.iter_mut().enumerate() {
        *value = (0.5 * (1.0 - (dx * i as f64).cos())) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::hann_window;

    #[test]
    fn test_hann_window() {
        {
            let mut buffer = [0.0_f32; 11];
            hann_window(&mut buffer);
            assert_eq!(buffer[0], 0.);
            assert_eq!(buffer[5], 1.);
            assert!(buffer[10].abs() <= 1e-7);
        }

        {
            let mut buffer = [0.0_f32; 5];
            hann_window(&mut buffer);
            let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
            for (value, expected) in buffer.iter().zip(expected.iter()) {
                assert!((value - expected).abs() <= 1e-7);
            }
        }

        {
            // Symmetric for even lengths
            let mut buffer = [0.0_f32; 6];
            hann_window(&mut buffer);
            assert!((buffer[1] - 0.345491503).abs() <= 1e-6);
            assert!((buffer[2] - 0.904508497).abs() <= 1e-6);
            assert!((buffer[1] - buffer[4]).abs() <= 1e-6);
            assert!((buffer[2] - buffer[3]).abs() <= 1e-6);
        }
    }
}

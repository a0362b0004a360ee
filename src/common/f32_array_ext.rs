//! `[f32]` extensions.

/// `[f32]` extensions.
pub trait F32ArrayExt {
    /// Returns the arithmetic mean, or 0 for an empty slice.
    fn mean(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level.
    fn rms_level(&self) -> f32;
}

impl F32ArrayExt for [f32] {
    fn mean(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.iter().sum::<f32>() / (self.len() as f32)
    }

    fn rms_level(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        };
        let sum_sq: f32 = self.iter().map(|sample| sample * sample).sum();
        (sum_sq / (self.len() as f32)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::F32ArrayExt;

    #[test]
    fn test_empty_window() {
        let window: [f32; 0] = [];
        assert!(window.rms_level() == 0.0);
        assert!(window.mean() == 0.0);
    }

    #[test]
    fn test_levels() {
        let window = [1.0_f32, -3.0, 1.0, -3.0];
        assert_eq!(window.mean(), -1.0);
        assert!((window.rms_level() - 5.0_f32.sqrt()).abs() <= 1e-6);
    }
}

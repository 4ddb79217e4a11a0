//! One-pole smoothing filter.

/// A one-pole low-pass smoother with single-sample feedback.
///
/// Each input is mixed against the previous output:
/// `y[n] = coeff * y[n-1] + (1 - coeff) * x[n]`. Higher coefficients smooth
/// harder (0.9 turns white noise into a watery rumble; 0.5 just takes the
/// edge off). The state starts at 0.0 and lives for one synthesis call.
#[derive(Debug, Clone)]
pub struct OnePole {
    coeff: f64,
    last: f64,
}

impl OnePole {
    /// Creates a smoother with the given feedback coefficient.
    ///
    /// # Arguments
    ///
    /// * `coeff` - Feedback weight in [0, 1); 0 passes input through unchanged
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforge::OnePole;
    ///
    /// let mut lp = OnePole::new(0.5);
    /// assert_eq!(lp.process(1.0), 0.5);
    /// assert_eq!(lp.process(1.0), 0.75);
    /// ```
    pub fn new(coeff: f64) -> Self {
        Self { coeff, last: 0.0 }
    }

    /// Filters one input sample and returns the smoothed output.
    pub fn process(&mut self, input: f64) -> f64 {
        self.last = self.coeff * self.last + (1.0 - self.coeff) * input;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_mixes_against_zero() {
        let mut lp = OnePole::new(0.9);
        // y[0] = 0.9 * 0 + 0.1 * 1
        assert!((lp.process(1.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_converges_to_constant_input() {
        let mut lp = OnePole::new(0.5);
        let mut y = 0.0;
        for _ in 0..64 {
            y = lp.process(1.0);
        }
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_coeff_passes_through() {
        let mut lp = OnePole::new(0.0);
        assert_eq!(lp.process(0.25), 0.25);
        assert_eq!(lp.process(-0.5), -0.5);
    }

    #[test]
    fn test_output_bounded_by_input_range() {
        let mut lp = OnePole::new(0.9);
        // A convex combination of values in [-1, 1] stays in [-1, 1]
        for i in 0..1000 {
            let x = if i % 2 == 0 { 1.0 } else { -1.0 };
            let y = lp.process(x);
            assert!((-1.0..=1.0).contains(&y));
        }
    }
}

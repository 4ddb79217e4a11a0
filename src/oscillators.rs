//! Oscillators: a stateless sine evaluated from absolute time, and a
//! phase-accumulating sawtooth.
//!
//! The sine is a pure function so it can be restarted at any time value and
//! driven with a time-varying frequency (e.g. a decaying kick pitch). The
//! sawtooth carries phase across samples within one synthesis call and is not
//! restartable mid-buffer.

use crate::Signal;
use std::f64::consts::TAU;

/// Evaluates a sine wave at time `t` seconds for the given frequency.
///
/// `frequency` may itself be a function of time at the call site; this
/// function only sees the instantaneous value.
///
/// # Examples
///
/// ```
/// use waveforge::sine;
///
/// assert_eq!(sine(440.0, 0.0), 0.0);
/// // One full period returns to the starting value
/// assert!((sine(100.0, 0.01) - sine(100.0, 0.0)).abs() < 1e-9);
/// ```
pub fn sine(frequency: f64, t: f64) -> f64 {
    (TAU * frequency * t).sin()
}

/// A sawtooth oscillator rising linearly from -1.0 to 1.0 once per period.
///
/// The phase accumulator stays in [0.0, 1.0): it is advanced by
/// `frequency / sample_rate` each sample and wraps by subtracting 1.0. One
/// instance lives for exactly one synthesis call.
pub struct SawtoothOscillator {
    /// Current phase of the oscillator (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
}

impl SawtoothOscillator {
    /// Creates a sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforge::{SawtoothOscillator, Signal};
    ///
    /// let mut osc = SawtoothOscillator::new(150.0, 44100);
    /// let sample = osc.next_sample();
    /// assert!((-1.0..=1.0).contains(&sample));
    /// ```
    pub fn new(frequency: f64, sample_rate: u32) -> Self {
        Self {
            phase: 0.0,
            phase_increment: frequency / sample_rate as f64,
        }
    }
}

impl Signal for SawtoothOscillator {
    fn next_sample(&mut self) -> f64 {
        // Advance then emit, so the first sample sits one step past -1.0.
        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        2.0 * self.phase - 1.0
    }
}

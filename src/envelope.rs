//! Envelope shapes for amplitude gating.
//!
//! An envelope is a pure function of elapsed time producing a gain
//! multiplier. There is no mutable state: re-evaluating at the same time
//! value always yields the same gain, so envelopes can be re-triggered by
//! simply rebasing the time argument (the music voices do exactly that).

/// Amplitude envelope shapes.
///
/// Gains are nominally in [0, 1]; `Trapezoid` and `Bell` stay inside that
/// range for t within their duration, `ExpDecay` starts at exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope {
    /// Exponential decay `exp(-t * rate)`: instant attack, asymptotic tail.
    ExpDecay(f64),

    /// Linear fade-in, full sustain, linear fade-out.
    ///
    /// Gain ramps from 0 to 1 over `[0, attack]`, holds 1.0 until
    /// `release_start`, then ramps back to 0 at `duration`.
    Trapezoid {
        attack: f64,
        release_start: f64,
        duration: f64,
    },

    /// Half-sine bell over `[0, duration]`: `sin(π * t / duration)`.
    Bell { duration: f64 },
}

impl Envelope {
    /// Evaluates the envelope gain at `t` seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforge::Envelope;
    ///
    /// let decay = Envelope::ExpDecay(20.0);
    /// assert_eq!(decay.gain(0.0), 1.0);
    /// assert!(decay.gain(0.1) < 0.2);
    ///
    /// let fade = Envelope::Trapezoid {
    ///     attack: 0.1,
    ///     release_start: 0.4,
    ///     duration: 0.5,
    /// };
    /// assert_eq!(fade.gain(0.25), 1.0);
    /// ```
    pub fn gain(&self, t: f64) -> f64 {
        match *self {
            Envelope::ExpDecay(rate) => (-t * rate).exp(),
            Envelope::Trapezoid {
                attack,
                release_start,
                duration,
            } => {
                if t < attack {
                    t / attack
                } else if t > release_start {
                    (duration - t) / (duration - release_start)
                } else {
                    1.0
                }
            }
            Envelope::Bell { duration } => (std::f64::consts::PI * t / duration).sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_exp_decay_boundaries() {
        let env = Envelope::ExpDecay(20.0);
        assert_eq!(env.gain(0.0), 1.0);
        // exp(-20 * 0.2) ≈ 0.018
        assert!((env.gain(0.2) - (-4.0f64).exp()).abs() < EPSILON);
    }

    #[test]
    fn test_exp_decay_monotonic() {
        let env = Envelope::ExpDecay(5.0);
        let mut prev = env.gain(0.0);
        for i in 1..100 {
            let g = env.gain(i as f64 * 0.01);
            assert!(g < prev);
            prev = g;
        }
    }

    #[test]
    fn test_trapezoid_boundaries() {
        // The recruit shape: 0.1 s attack, release from 0.4 s, 0.5 s total
        let env = Envelope::Trapezoid {
            attack: 0.1,
            release_start: 0.4,
            duration: 0.5,
        };
        assert_eq!(env.gain(0.0), 0.0);
        assert!((env.gain(0.5)).abs() < EPSILON);
        assert!((env.gain(0.05) - 0.5).abs() < EPSILON);
        assert!((env.gain(0.45) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_trapezoid_sustain_is_unity() {
        let env = Envelope::Trapezoid {
            attack: 0.1,
            release_start: 0.4,
            duration: 0.5,
        };
        for i in 0..=100 {
            let t = 0.1 + 0.3 * i as f64 / 100.0;
            assert_eq!(env.gain(t), 1.0, "sustain should be flat at t={t}");
        }
    }

    #[test]
    fn test_bell_boundaries() {
        let env = Envelope::Bell { duration: 0.3 };
        assert!(env.gain(0.0).abs() < EPSILON);
        assert!(env.gain(0.3).abs() < EPSILON);
        assert!((env.gain(0.15) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_gain_is_pure() {
        let env = Envelope::ExpDecay(10.0);
        let a = env.gain(0.07);
        let _ = env.gain(0.5);
        let b = env.gain(0.07);
        assert_eq!(a, b);
    }
}

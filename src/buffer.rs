//! Rendered sample buffers.

use crate::quantize::quantize;

/// A finite, ordered sequence of 16-bit PCM samples plus the rate they were
/// rendered at.
///
/// Buffers are produced once by a synthesizer and handed off by value; nothing
/// mutates them after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a buffer from already-quantized samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Renders a buffer by driving the sample clock through a per-sample
    /// signal function.
    ///
    /// The closure is called once per tick with the elapsed time in seconds
    /// (`i / sample_rate`), and its return value is quantized into the
    /// buffer. The buffer length is exactly `floor(duration * sample_rate)`.
    ///
    /// # Panics
    ///
    /// Panics if `duration` is not positive or `sample_rate` is zero. Neither
    /// occurs in normal operation; a zero here is a programming error, not a
    /// runtime condition to recover from.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforge::SampleBuffer;
    ///
    /// // A constant half-scale signal for 10 ms
    /// let buffer = SampleBuffer::render(0.01, 44100, |_t| 0.5);
    /// assert_eq!(buffer.len(), 441);
    /// ```
    pub fn render(duration: f64, sample_rate: u32, mut signal: impl FnMut(f64) -> f64) -> Self {
        assert!(duration > 0.0, "duration must be greater than 0");
        assert!(sample_rate > 0, "sample_rate must be greater than 0");

        let n_samples = (duration * sample_rate as f64) as usize;
        let mut samples = Vec::with_capacity(n_samples);
        for i in 0..n_samples {
            let t = i as f64 / sample_rate as f64;
            samples.push(quantize(signal(t)));
        }
        Self {
            samples,
            sample_rate,
        }
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The PCM samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration of the rendered audio in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_length_is_floored() {
        // 0.15 s at 44100 Hz = 6615 samples exactly
        let buffer = SampleBuffer::render(0.15, 44100, |_| 0.0);
        assert_eq!(buffer.len(), 6615);

        // A non-integer product truncates
        let buffer = SampleBuffer::render(0.1, 44101, |_| 0.0);
        assert_eq!(buffer.len(), 4410);
    }

    #[test]
    fn test_render_passes_elapsed_time() {
        let mut times = Vec::new();
        SampleBuffer::render(0.001, 1000, |t| {
            times.push(t);
            0.0
        });
        assert_eq!(times, vec![0.0]);

        let mut times = Vec::new();
        SampleBuffer::render(0.004, 1000, |t| {
            times.push(t);
            0.0
        });
        assert_eq!(times, vec![0.0, 0.001, 0.002, 0.003]);
    }

    #[test]
    fn test_render_quantizes() {
        let buffer = SampleBuffer::render(0.001, 1000, |_| 1.0);
        assert_eq!(buffer.samples(), &[32767]);
    }

    #[test]
    fn test_duration_roundtrip() {
        let buffer = SampleBuffer::render(0.5, 44100, |_| 0.0);
        assert!((buffer.duration() - 0.5).abs() < 1e-4);
    }

    #[test]
    #[should_panic(expected = "duration must be greater than 0")]
    fn test_zero_duration_panics() {
        SampleBuffer::render(0.0, 44100, |_| 0.0);
    }

    #[test]
    #[should_panic(expected = "sample_rate must be greater than 0")]
    fn test_zero_sample_rate_panics() {
        SampleBuffer::render(1.0, 0, |_| 0.0);
    }
}

//! Core signal trait.
//!
//! Everything that produces audio samples one tick at a time (noise sources,
//! phase-accumulating oscillators) implements [`Signal`]. Pure functions of
//! time (sine, envelopes) don't need it and are plain functions instead.

/// Common interface for stateful signal sources.
///
/// The trait provides two operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

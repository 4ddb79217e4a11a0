//! Musical time derived from the sample counter.
//!
//! Rather than accumulating beats as samples tick by, the clock derives every
//! musical quantity directly from the sample index. That keeps the sequencer
//! stateless and immune to drift: sample 0 of bar 3 computes the same
//! position whether or not the previous bars were ever rendered.

/// A pure beat clock: maps sample indices to positions in musical time.
///
/// Assumes a fixed 4/4 meter (4 beats per bar, 4 sixteenths per beat).
#[derive(Debug, Clone, Copy)]
pub struct BeatClock {
    bpm: f64,
    sample_rate: u32,
}

/// Where a single sample falls in musical time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatPosition {
    /// Elapsed time since the start of the track, in seconds
    pub time: f64,
    /// Time since the start of the current beat
    pub beat_time: f64,
    /// Time since the start of the current bar
    pub bar_time: f64,
    /// Zero-based index of the current bar
    pub bar_index: u64,
}

impl BeatClock {
    /// Creates a beat clock at the given tempo.
    ///
    /// # Panics
    ///
    /// Panics if `bpm` or `sample_rate` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforge::BeatClock;
    ///
    /// let clock = BeatClock::new(130.0, 44100);
    /// let pos = clock.position(0);
    /// assert_eq!(pos.bar_index, 0);
    /// assert_eq!(pos.beat_time, 0.0);
    /// ```
    pub fn new(bpm: f64, sample_rate: u32) -> Self {
        assert!(bpm > 0.0, "BPM must be greater than 0");
        assert!(sample_rate > 0, "sample_rate must be greater than 0");
        Self { bpm, sample_rate }
    }

    /// Duration of one beat in seconds.
    pub fn beat_duration(&self) -> f64 {
        60.0 / self.bpm
    }

    /// Duration of one 4-beat bar in seconds.
    pub fn bar_duration(&self) -> f64 {
        self.beat_duration() * 4.0
    }

    /// Duration of one sixteenth note in seconds.
    pub fn sixteenth_duration(&self) -> f64 {
        self.beat_duration() / 4.0
    }

    /// Derives the musical position of the sample at `sample_index`.
    pub fn position(&self, sample_index: usize) -> BeatPosition {
        let time = sample_index as f64 / self.sample_rate as f64;
        BeatPosition {
            time,
            beat_time: time % self.beat_duration(),
            bar_time: time % self.bar_duration(),
            bar_index: (time / self.bar_duration()) as u64,
        }
    }
}

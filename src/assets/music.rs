//! The looping main theme: a four-bar techno pattern at 130 BPM.
//!
//! Four independently gated voices are evaluated per sample and summed before
//! a single quantization pass. All gating decisions come from the
//! [`BeatClock`], so every voice stays locked to the same running sample
//! counter.

use crate::Signal;
use crate::buffer::SampleBuffer;
use crate::clock::{BeatClock, BeatPosition};
use crate::envelope::Envelope;
use crate::noise::WhiteNoise;
use crate::oscillators::sine;
use crate::quantize::quantize;
use rand::Rng;

/// Lead arpeggio notes, one per sixteenth. The pattern repeats twice per bar.
const ARPEGGIO: [f64; 8] = [440.0, 554.0, 659.0, 880.0, 659.0, 554.0, 440.0, 329.0];

/// The kick sounds for the first 150 ms of every beat.
const KICK_GATE: f64 = 0.15;

/// The hi-hat sounds for the first 100 ms of every off-beat.
const HAT_GATE: f64 = 0.1;

/// Synthesizes the looping theme: `bars` bars of four beats at `bpm`.
///
/// The hi-hat is the only voice that draws from the RNG; pass a seeded one
/// for reproducible output.
///
/// # Panics
///
/// Panics if `bpm`, `bars` or `sample_rate` is not positive.
pub fn main_theme<R: Rng>(bpm: f64, bars: u32, sample_rate: u32, rng: &mut R) -> SampleBuffer {
    assert!(bars > 0, "bars must be greater than 0");

    let clock = BeatClock::new(bpm, sample_rate);
    let duration = clock.bar_duration() * bars as f64;
    let n_samples = (duration * sample_rate as f64) as usize;

    let mut hat_noise = WhiteNoise::with_rng(rng);
    let mut samples = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let pos = clock.position(i);
        let value = kick(&pos)
            + hi_hat(&clock, &pos, &mut hat_noise)
            + bass(&clock, &pos)
            + lead(&clock, &pos);
        samples.push(quantize(value));
    }
    SampleBuffer::new(samples, sample_rate)
}

/// Kick drum: a sine whose pitch falls from 150 Hz as its envelope decays,
/// re-triggered at the top of every beat.
fn kick(pos: &BeatPosition) -> f64 {
    if pos.beat_time >= KICK_GATE {
        return 0.0;
    }
    let kt = pos.beat_time;
    let envelope = Envelope::ExpDecay(20.0).gain(kt);
    let pitch = 150.0 * (-kt * 30.0).exp();
    sine(pitch, kt) * envelope * 0.8
}

/// Hi-hat: a short noise tick on the off-beat "and".
fn hi_hat<R: Rng>(clock: &BeatClock, pos: &BeatPosition, noise: &mut WhiteNoise<R>) -> f64 {
    let half = clock.beat_duration() / 2.0;
    if pos.beat_time > half && pos.beat_time < half + HAT_GATE {
        let ht = pos.beat_time - half;
        noise.next_sample() * Envelope::ExpDecay(50.0).gain(ht) * 0.3
    } else {
        0.0
    }
}

/// Bass: a square-ish pulse filling the second half of each beat, alternating
/// between A1 and E1 by bar parity.
fn bass(clock: &BeatClock, pos: &BeatPosition) -> f64 {
    let half = clock.beat_duration() / 2.0;
    if pos.beat_time <= half {
        return 0.0;
    }
    let bt = pos.beat_time - half;
    // Sign of the sine at absolute time, flattened to a half-amplitude square
    let square = if sine(bass_frequency(pos.bar_index), pos.time) > 0.0 {
        0.5
    } else {
        -0.5
    };
    let envelope = 1.0 - bt / half;
    square * envelope * 0.4
}

/// A1 on even bars, E1 on odd bars.
fn bass_frequency(bar_index: u64) -> f64 {
    if bar_index % 2 == 1 { 41.2 } else { 55.0 }
}

/// Lead: the arpeggio note for the current sixteenth, its envelope re-based
/// to the start of the step. The sine runs on absolute time, so re-triggers
/// gate a phase-continuous tone rather than restarting it.
fn lead(clock: &BeatClock, pos: &BeatPosition) -> f64 {
    let sixteenth = clock.sixteenth_duration();
    let step = (pos.bar_time / sixteenth) as usize;
    let note = ARPEGGIO[step % ARPEGGIO.len()];
    let lt = pos.time % sixteenth;
    sine(note, pos.time) * Envelope::ExpDecay(10.0).gain(lt) * 0.15
}

//! The six one-shot sound effects.
//!
//! Each synthesizer is a pure function of (duration, sample rate) up to its
//! noise source: a raw signal, an envelope, and for the noisier assets a
//! one-pole smoother, multiplied together, scaled by a fixed mix level, and
//! quantized by the render loop.

use crate::Signal;
use crate::buffer::SampleBuffer;
use crate::envelope::Envelope;
use crate::filter::OnePole;
use crate::noise::WhiteNoise;
use crate::oscillators::{SawtoothOscillator, sine};
use rand::Rng;

/// The recruit jingle's chord: an A-major-ish triad.
const CHORD: [f64; 3] = [440.0, 554.0, 659.0];

/// Short noise burst with a fast exponential decay.
pub fn shoot<R: Rng>(duration: f64, sample_rate: u32, rng: &mut R) -> SampleBuffer {
    let mut noise = WhiteNoise::with_rng(rng);
    let envelope = Envelope::ExpDecay(20.0);
    SampleBuffer::render(duration, sample_rate, |t| {
        noise.next_sample() * envelope.gain(t) * 0.5
    })
}

/// Longer rumble: low-passed noise under a slow decay.
pub fn explosion<R: Rng>(duration: f64, sample_rate: u32, rng: &mut R) -> SampleBuffer {
    let mut noise = WhiteNoise::with_rng(rng);
    let mut lowpass = OnePole::new(0.5);
    let envelope = Envelope::ExpDecay(5.0);
    SampleBuffer::render(duration, sample_rate, |t| {
        lowpass.process(noise.next_sample()) * envelope.gain(t) * 0.8
    })
}

/// Three-sine chord with a 0.1 s fade at each end.
pub fn recruit(duration: f64, sample_rate: u32) -> SampleBuffer {
    let envelope = Envelope::Trapezoid {
        attack: 0.1,
        release_start: duration - 0.1,
        duration,
    };
    SampleBuffer::render(duration, sample_rate, |t| {
        let chord: f64 = CHORD.iter().map(|&f| sine(f, t)).sum::<f64>() / CHORD.len() as f64;
        chord * envelope.gain(t) * 0.5
    })
}

/// Short low thud: an 80 Hz sine mixed with noise, decaying fast.
pub fn move_land<R: Rng>(duration: f64, sample_rate: u32, rng: &mut R) -> SampleBuffer {
    let mut noise = WhiteNoise::with_rng(rng);
    let envelope = Envelope::ExpDecay(25.0);
    SampleBuffer::render(duration, sample_rate, |t| {
        let raw = sine(80.0, t) * 0.6 + noise.next_sample() * 0.4;
        raw * envelope.gain(t) * 0.4
    })
}

/// Swish: heavily smoothed noise under a 5 Hz amplitude LFO and a bell
/// envelope. The smoothing kills most of the energy, so the mix is boosted
/// past unity and relies on the quantizer's clamp.
pub fn move_water<R: Rng>(duration: f64, sample_rate: u32, rng: &mut R) -> SampleBuffer {
    let mut noise = WhiteNoise::with_rng(rng);
    let mut lowpass = OnePole::new(0.9);
    let envelope = Envelope::Bell { duration };
    SampleBuffer::render(duration, sample_rate, |t| {
        // Order matters: filter, then LFO, then envelope, then mix level
        let swish = lowpass.process(noise.next_sample());
        let lfo = 0.5 + 0.5 * sine(5.0, t);
        swish * lfo * envelope.gain(t) * 2.0
    })
}

/// Engine drone: a 150 Hz sawtooth over a 75 Hz sine sub, edges faded so the
/// sound loops without clicking.
pub fn move_air(duration: f64, sample_rate: u32) -> SampleBuffer {
    let mut saw = SawtoothOscillator::new(150.0, sample_rate);
    let envelope = Envelope::Trapezoid {
        attack: 0.05,
        release_start: duration - 0.05,
        duration,
    };
    SampleBuffer::render(duration, sample_rate, |t| {
        let raw = saw.next_sample() * 0.3 + sine(75.0, t) * 0.5;
        raw * envelope.gain(t) * 0.3
    })
}

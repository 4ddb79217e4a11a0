//! Waveforge - procedural synthesis of game audio assets.
//!
//! This library builds a fixed set of short sound effects and a looping music
//! track entirely from signal primitives: oscillators, white noise, envelope
//! shapes, and a one-pole smoothing filter. Each asset is rendered as a mono
//! buffer of 16-bit samples at 44100 Hz, ready to be written out as a WAV
//! file by the [`wav`] module or the `genassets` binary.
//!
//! # Examples
//!
//! ```
//! use waveforge::Asset;
//!
//! let buffer = Asset::Shoot.synthesize();
//! assert_eq!(buffer.len(), (0.2 * 44100.0) as usize);
//! ```

pub mod assets;
pub mod buffer;
pub mod clock;
pub mod envelope;
pub mod filter;
pub mod noise;
pub mod oscillators;
pub mod quantize;
pub mod signal;
pub mod wav;

// Re-export commonly used types at the crate root
pub use assets::{Asset, SAMPLE_RATE};
pub use buffer::SampleBuffer;
pub use clock::{BeatClock, BeatPosition};
pub use envelope::Envelope;
pub use filter::OnePole;
pub use noise::WhiteNoise;
pub use oscillators::{SawtoothOscillator, sine};
pub use quantize::quantize;
pub use signal::Signal;
pub use wav::{WriteError, write_asset};

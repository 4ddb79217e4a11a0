//! The fixed asset catalog.
//!
//! Each asset is a hand-composed synthesizer: a per-sample raw signal, an
//! envelope, sometimes a filter, multiplied together, scaled, and quantized.
//! Durations and sample rate are fixed per asset, not runtime-configurable.

mod music;
mod sfx;

pub use music::main_theme;
pub use sfx::{explosion, move_air, move_land, move_water, recruit, shoot};

use crate::buffer::SampleBuffer;
use rand::Rng;

/// Sample rate shared by every asset in the catalog, in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Tempo of the main theme, in beats per minute.
pub const THEME_BPM: f64 = 130.0;

/// Length of the main theme in 4-beat bars.
pub const THEME_BARS: u32 = 4;

/// Every audio asset the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Short noise burst with a fast decay
    Shoot,
    /// Low-passed noise rumble with a long tail
    Explosion,
    /// Three-sine chord with fade-in and fade-out
    Recruit,
    /// Low thud: 80 Hz sine mixed with noise
    MoveLand,
    /// Swishing band-limited noise under a slow amplitude LFO
    MoveWater,
    /// Engine drone: sawtooth over a sine sub-oscillator
    MoveAir,
    /// Four-bar looping techno track
    MainTheme,
}

impl Asset {
    /// All assets in generation order.
    pub const ALL: [Asset; 7] = [
        Asset::Shoot,
        Asset::Explosion,
        Asset::Recruit,
        Asset::MoveLand,
        Asset::MoveWater,
        Asset::MoveAir,
        Asset::MainTheme,
    ];

    /// Short identifier for the asset.
    pub fn name(self) -> &'static str {
        match self {
            Asset::Shoot => "shoot",
            Asset::Explosion => "explosion",
            Asset::Recruit => "recruit",
            Asset::MoveLand => "move_land",
            Asset::MoveWater => "move_water",
            Asset::MoveAir => "move_air",
            Asset::MainTheme => "main_theme",
        }
    }

    /// File name the asset is published under.
    ///
    /// The main theme keeps its historical `.mp3` name even though the
    /// content is WAV; consumers key on that name, and synthesis is unaware
    /// of it either way.
    pub fn file_name(self) -> &'static str {
        match self {
            Asset::MainTheme => "main_menu.mp3",
            Asset::Shoot => "shoot.wav",
            Asset::Explosion => "explosion.wav",
            Asset::Recruit => "recruit.wav",
            Asset::MoveLand => "move_land.wav",
            Asset::MoveWater => "move_water.wav",
            Asset::MoveAir => "move_air.wav",
        }
    }

    /// Fixed duration of the asset in seconds.
    pub fn duration(self) -> f64 {
        match self {
            Asset::Shoot => 0.2,
            Asset::Explosion => 0.8,
            Asset::Recruit => 0.5,
            Asset::MoveLand => 0.15,
            Asset::MoveWater => 0.3,
            Asset::MoveAir => 0.4,
            Asset::MainTheme => THEME_BARS as f64 * 4.0 * 60.0 / THEME_BPM,
        }
    }

    /// Synthesizes the asset using process entropy for the noise source.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforge::{Asset, SAMPLE_RATE};
    ///
    /// let buffer = Asset::Explosion.synthesize();
    /// assert_eq!(buffer.sample_rate(), SAMPLE_RATE);
    /// ```
    pub fn synthesize(self) -> SampleBuffer {
        self.synthesize_with(&mut rand::thread_rng())
    }

    /// Synthesizes the asset with an explicit RNG.
    ///
    /// Pass a seeded RNG to make the output byte-identical across runs; the
    /// noise source is the only non-determinism in the pipeline.
    pub fn synthesize_with<R: Rng>(self, rng: &mut R) -> SampleBuffer {
        match self {
            Asset::Shoot => shoot(self.duration(), SAMPLE_RATE, rng),
            Asset::Explosion => explosion(self.duration(), SAMPLE_RATE, rng),
            Asset::Recruit => recruit(self.duration(), SAMPLE_RATE),
            Asset::MoveLand => move_land(self.duration(), SAMPLE_RATE, rng),
            Asset::MoveWater => move_water(self.duration(), SAMPLE_RATE, rng),
            Asset::MoveAir => move_air(self.duration(), SAMPLE_RATE),
            Asset::MainTheme => main_theme(THEME_BPM, THEME_BARS, SAMPLE_RATE, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_every_asset_length_matches_duration() {
        let mut rng = StdRng::seed_from_u64(0);
        for asset in Asset::ALL {
            let expected = (asset.duration() * SAMPLE_RATE as f64) as usize;
            let buffer = asset.synthesize_with(&mut rng);
            assert_eq!(
                buffer.len(),
                expected,
                "{} should render exactly floor(duration * rate) samples",
                asset.name()
            );
        }
    }

    #[test]
    fn test_file_names_are_unique() {
        for a in Asset::ALL {
            for b in Asset::ALL {
                if a != b {
                    assert_ne!(a.file_name(), b.file_name());
                }
            }
        }
    }

    #[test]
    fn test_theme_duration_is_four_bars() {
        // 130 BPM: 16 beats of 60/130 s
        assert!((Asset::MainTheme.duration() - 16.0 * 60.0 / 130.0).abs() < 1e-12);
    }
}

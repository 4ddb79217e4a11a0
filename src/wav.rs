//! WAV persistence for rendered buffers.
//!
//! Synthesis knows nothing about files; this module wraps a [`SampleBuffer`]
//! as a mono 16-bit PCM WAV, creating the destination directory when needed.
//! File naming (including the main theme's deliberately mismatched `.mp3`
//! extension) lives on [`Asset`]; the bytes written are WAV either way.

use crate::assets::Asset;
use crate::buffer::SampleBuffer;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while persisting a rendered buffer.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The WAV file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

/// Writes a buffer to `path` as a mono 16-bit PCM WAV.
pub fn write_wav(path: &Path, buffer: &SampleBuffer) -> Result<(), WriteError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let wrap = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WavWriter::create(path, spec).map_err(wrap)?;
    for &sample in buffer.samples() {
        writer.write_sample(sample).map_err(wrap)?;
    }
    writer.finalize().map_err(wrap)
}

/// Writes an asset's buffer under its fixed file name inside `dir`, creating
/// the directory if it does not exist.
///
/// # Returns
///
/// The full path of the written file.
///
/// # Examples
///
/// ```no_run
/// use waveforge::{Asset, wav};
/// use std::path::Path;
///
/// let buffer = Asset::Shoot.synthesize();
/// let path = wav::write_asset(Path::new("assets/audio"), Asset::Shoot, &buffer)?;
/// assert!(path.ends_with("shoot.wav"));
/// # Ok::<(), wav::WriteError>(())
/// ```
pub fn write_asset(dir: &Path, asset: Asset, buffer: &SampleBuffer) -> Result<PathBuf, WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(asset.file_name());
    write_wav(&path, buffer)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("waveforge-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = temp_dir("roundtrip");
        let buffer = SampleBuffer::new(vec![0, 100, -100, 32767, -32767], 44100);
        let path = write_asset(&dir, Asset::Shoot, &buffer).unwrap();
        assert!(path.ends_with("shoot.wav"));

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
        assert_eq!(samples, buffer.samples());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_creates_nested_directory() {
        let dir = temp_dir("nested").join("a").join("b");
        let buffer = SampleBuffer::new(vec![0; 10], 44100);
        write_asset(&dir, Asset::Explosion, &buffer).unwrap();
        assert!(dir.join("explosion.wav").exists());

        fs::remove_dir_all(dir.parent().unwrap().parent().unwrap()).unwrap();
    }

    #[test]
    fn test_theme_keeps_mp3_name_with_wav_content() {
        let dir = temp_dir("mp3name");
        let buffer = SampleBuffer::new(vec![1, 2, 3], 44100);
        let path = write_asset(&dir, Asset::MainTheme, &buffer).unwrap();
        assert!(path.ends_with("main_menu.mp3"));

        // The content is a readable WAV regardless of the extension
        let mut reader = hound::WavReader::open(&path).unwrap();
        let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
        assert_eq!(samples, vec![1, 2, 3]);

        fs::remove_dir_all(&dir).unwrap();
    }
}

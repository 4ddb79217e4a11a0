//! Renders every asset in the catalog and writes it to the output directory.
//!
//! Usage: `genassets [output-dir]` (default `assets/audio`).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use waveforge::{Asset, wav};

fn main() -> Result<()> {
    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/audio"));

    for asset in Asset::ALL {
        let buffer = asset.synthesize();
        let path = wav::write_asset(&out_dir, asset, &buffer)
            .with_context(|| format!("failed to generate {}", asset.name()))?;
        println!(
            "Generated {} ({:.2}s, {} samples)",
            path.display(),
            buffer.duration(),
            buffer.len()
        );
    }
    Ok(())
}

use anyhow::{Context, Result};
use odograph_codec::Odograph;
use std::path::PathBuf;

use crate::utils::load_coordinate;

pub fn recover_file(coord_source: &str, output: &PathBuf) -> Result<()> {
    let coordinate = load_coordinate(coord_source)?;

    println!(
        "🧭 Recovering {} bytes from coordinate...",
        coordinate.length_bytes
    );

    let bytes =
        Odograph::decode(&coordinate).map_err(|e| anyhow::anyhow!("Reconstruction failed: {e}"))?;

    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✓ Successfully recovered to: {}", output.display());
    println!("  Size: {} bytes", bytes.len());
    println!("  Start mask: {}", coordinate.start_mask);

    Ok(())
}

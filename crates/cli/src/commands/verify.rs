use anyhow::{Context, Result};
use odograph_codec::Odograph;
use std::path::PathBuf;

use crate::printing::print_coordinate_summary;
use crate::utils::load_coordinate;

/// Re-encode `file` and compare against the stored coordinate.
///
/// Unlike recovery, this works for every input: the forward walk is always
/// deterministic even when the backward walk is ambiguous.
pub fn verify_file(file: &PathBuf, coord_source: &str, start_mask: Option<u32>) -> Result<()> {
    let stored = load_coordinate(coord_source)?;
    let start = start_mask.unwrap_or(stored.start_mask);
    let codec = Odograph::new(start).map_err(|e| anyhow::anyhow!("Invalid start mask: {e}"))?;

    let data =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let fresh = codec
        .encode(&data)
        .map_err(|e| anyhow::anyhow!("Failed to encode {}: {e}", file.display()))?;

    if fresh == stored {
        println!("✓ Coordinate matches {}", file.display());
        return Ok(());
    }

    println!("Stored:");
    print_coordinate_summary(&stored);
    println!("Re-encoded:");
    print_coordinate_summary(&fresh);
    anyhow::bail!("Coordinate mismatch for {}", file.display());
}

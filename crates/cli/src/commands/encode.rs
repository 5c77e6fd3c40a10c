use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use odograph_codec::{Coordinate, Odograph};
use rayon::prelude::*;
use std::path::PathBuf;

use crate::printing::print_coordinate_summary;
use crate::utils::{coordinate_path, save_coordinate};

pub fn encode_files(
    files: &[PathBuf],
    start_mask: u32,
    output: Option<&PathBuf>,
    show_progress: bool,
) -> Result<()> {
    if output.is_some() && files.len() > 1 {
        anyhow::bail!("--output is only valid with a single input file");
    }

    let codec = Odograph::new(start_mask).map_err(|e| anyhow::anyhow!("Invalid start mask: {e}"))?;

    println!("🧭 Odograph - Encoding {} file(s)", files.len());
    println!("============================================\n");

    let pb = if show_progress && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Encodes share nothing, so independent files parallelize freely.
    let results: Vec<Result<(PathBuf, Coordinate)>> = files
        .par_iter()
        .map(|file| {
            let data = std::fs::read(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let coordinate = codec
                .encode(&data)
                .map_err(|e| anyhow::anyhow!("Failed to encode {}: {e}", file.display()))?;

            let target = match output {
                Some(path) => path.clone(),
                None => coordinate_path(file),
            };
            save_coordinate(&coordinate, &target)?;

            if let Some(pb) = &pb {
                pb.inc(1);
            }
            Ok((target, coordinate))
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    for result in results {
        let (target, coordinate) = result?;
        println!("✓ Coordinate written to: {}", target.display());
        print_coordinate_summary(&coordinate);
    }

    println!("\n💡 Use 'odograph recover' to reconstruct, or 'odograph verify' to check integrity");

    Ok(())
}

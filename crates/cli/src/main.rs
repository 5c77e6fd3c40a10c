mod commands;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{encode, inspect, recover, verify};

/// Odograph: an oscillator-walk coordinate codec
///
/// Encodes files into compact five-integer coordinates and reconstructs them
/// through the exact backward walk.
#[derive(Parser, Debug)]
#[command(name = "odograph")]
#[command(author, version, about = "Maps files to oscillator-walk coordinates and back", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel encoding
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode files into coordinate JSON.
    ///
    /// Each input file is walked once, byte by byte, and its coordinate is
    /// written as pretty JSON (default: `<file>.coord.json`).
    Encode {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Starting mask (root) for the walk
        #[arg(short, long, default_value_t = odograph_codec::ROOT_MASK)]
        start_mask: u32,

        /// Output path for the coordinate (single input only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show progress bar
        #[arg(long, default_value = "true")]
        progress: bool,
    },

    /// Recover bytes from a saved coordinate.
    ///
    /// Fails loudly when the backward walk is ambiguous or the coordinate is
    /// corrupted; no partial output is ever written.
    Recover {
        /// Coordinate: path to a JSON file or an inline JSON string
        #[arg(short, long)]
        coord: String,

        /// Output file for the recovered bytes
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show a coordinate's fields and derived facts.
    Inspect {
        /// Coordinate: path to a JSON file or an inline JSON string
        #[arg(short, long)]
        coord: String,
    },

    /// Re-encode a file and compare against a saved coordinate.
    ///
    /// The integrity check that works for every input, regardless of whether
    /// the backward walk is uniquely decodable.
    Verify {
        /// Input file
        file: PathBuf,

        /// Coordinate: path to a JSON file or an inline JSON string
        #[arg(short, long)]
        coord: String,

        /// Starting mask override (default: the coordinate's own start mask)
        #[arg(short, long)]
        start_mask: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Encode {
            files,
            start_mask,
            output,
            progress,
        } => {
            encode::encode_files(&files, start_mask, output.as_ref(), progress)?;
        }
        Commands::Recover { coord, output } => {
            recover::recover_file(&coord, &output)?;
        }
        Commands::Inspect { coord } => {
            inspect::show_coordinate(&coord)?;
        }
        Commands::Verify {
            file,
            coord,
            start_mask,
        } => {
            verify::verify_file(&file, &coord, start_mask)?;
        }
    }

    Ok(())
}

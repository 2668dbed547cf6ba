//! oxitune CLI - YM register stream compressor
//!
//! Packs YM3 chiptune register images into compact byte streams that unpack
//! with a few bytes of decoder state, and unpacks them back byte-exact.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{Format, PackMode, cmd_delta, cmd_info, cmd_pack, cmd_unpack};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxitune")]
#[command(
    author,
    version,
    about = "Compressor for YM3 chiptune register streams"
)]
#[command(long_about = "
oxitune compresses YM3 register images (14 sound-chip registers sampled
once per frame) into compact streams tuned for tiny playback routines.
The packed file records neither format nor mode, so unpack must be given
the same flags that pack was.

Examples:
  oxitune pack tune.ym tune.ymp
  oxitune pack tune.ym tune.ymp --format v2 --mode grouped
  oxitune unpack tune.ymp tune.ym --format v2 --mode grouped
  oxitune info tune.ym
  oxitune delta tune.ym tune.delta
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a YM3 file into a compressed stream container
    #[command(alias = "p")]
    Pack {
        /// YM3 file to pack
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Stream format
        #[arg(short, long, value_enum, default_value = "v1")]
        format: Format,

        /// Stream layout
        #[arg(short, long, value_enum, default_value = "registers")]
        mode: PackMode,

        /// Match search window in bytes
        #[arg(short, long, default_value = "512")]
        search_distance: usize,

        /// Show per-stream detail
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Unpack a compressed container back into a YM3 file
    #[command(alias = "u")]
    Unpack {
        /// Packed file to read
        input: PathBuf,

        /// Output YM3 file
        output: PathBuf,

        /// Stream format used when packing
        #[arg(short, long, value_enum, default_value = "v1")]
        format: Format,

        /// Stream layout used when packing
        #[arg(short, long, value_enum, default_value = "registers")]
        mode: PackMode,
    },

    /// Show information about a YM3 file
    #[command(alias = "i")]
    Info {
        /// YM3 file to inspect
        input: PathBuf,
    },

    /// Write the frame-delta encoding of a YM3 file
    Delta {
        /// YM3 file to read
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pack {
            input,
            output,
            format,
            mode,
            search_distance,
            verbose,
            progress,
        } => cmd_pack(
            &input, &output, format, mode, search_distance, verbose, progress,
        ),
        Commands::Unpack {
            input,
            output,
            format,
            mode,
        } => cmd_unpack(&input, &output, format, mode),
        Commands::Info { input } => cmd_info(&input),
        Commands::Delta { input, output } => cmd_delta(&input, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

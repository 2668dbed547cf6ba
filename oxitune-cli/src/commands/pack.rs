//! Pack command implementation.

use clap::ValueEnum;
use oxitune_lz::{FormatKind, pack_verified_with_stats};
use oxitune_ym::{Mode, Ym3File, plan_streams, write_container};
use std::path::Path;

use crate::utils::create_progress_bar;

/// Compressed stream format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Chained-offset format (default)
    #[default]
    V1,
    /// Nibble-header format, tighter on short runs
    V2,
}

/// Stream layout for packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PackMode {
    /// Fourteen independent register streams (default)
    #[default]
    Registers,
    /// Interleaved register pairs, then single registers
    Grouped,
    /// The whole register body as one bare stream
    Whole,
}

impl Format {
    /// Library format this flag selects.
    pub fn kind(self) -> FormatKind {
        match self {
            Format::V1 => FormatKind::V1,
            Format::V2 => FormatKind::V2,
        }
    }
}

impl PackMode {
    /// Library mode this flag selects.
    pub fn mode(self) -> Mode {
        match self {
            PackMode::Registers => Mode::Registers,
            PackMode::Grouped => Mode::Grouped,
            PackMode::Whole => Mode::Whole,
        }
    }
}

pub fn cmd_pack(
    input: &Path,
    output: &Path,
    format: Format,
    mode: PackMode,
    search_distance: usize,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let ym = Ym3File::parse(&data)?;
    let kind = format.kind();
    let mode = mode.mode();

    println!(
        "Packing {} ({} frames) to {}",
        input.display(),
        ym.frames(),
        output.display()
    );

    let plans = plan_streams(&ym, mode, search_distance);
    let pb = create_progress_bar(plans.len() as u64, progress);
    pb.set_message("streams");

    let mut payloads = Vec::with_capacity(plans.len());
    for plan in &plans {
        let (bytes, stats) =
            pack_verified_with_stats(&plan.data, plan.multiple, plan.search_distance, kind)?;
        if verbose {
            pb.println(format!(
                "  {}: {} -> {} bytes, {:.1}% matched",
                plan.label,
                plan.data.len(),
                bytes.len(),
                stats.match_percent()
            ));
        }
        payloads.push(bytes);
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    // Whole mode writes the bare stream; the others get the offset table
    let packed = match mode {
        Mode::Whole => payloads.pop().unwrap_or_default(),
        _ => write_container(ym.frames(), &payloads)?,
    };
    std::fs::write(output, &packed)?;

    println!("Packed size: {} bytes", packed.len());
    if !data.is_empty() {
        println!(
            "Compression ratio: {:.1}%",
            (1.0 - packed.len() as f64 / data.len() as f64) * 100.0
        );
    }
    Ok(())
}

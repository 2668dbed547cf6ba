//! Info command implementation.

use oxitune_ym::{REGISTER_NAMES, Ym3File};
use std::path::Path;

pub fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let ym = Ym3File::parse(&data)?;

    println!("YM3 Image Information");
    println!("=====================");
    println!("File: {}", input.display());
    println!("Size: {} bytes", data.len());
    println!("Frames: {}", ym.frames());
    println!("Duration: {:.1}s at 50 Hz", ym.frames() as f64 / 50.0);

    println!();
    println!("Registers:");
    for (r, name) in REGISTER_NAMES.iter().enumerate() {
        let mut seen = [false; 256];
        let mut distinct = 0usize;
        for &value in ym.register(r) {
            if !seen[value as usize] {
                seen[value as usize] = true;
                distinct += 1;
            }
        }
        println!("  {:>2}  {:<9}  {:>3} distinct values", r, name, distinct);
    }

    Ok(())
}

//! Delta command implementation.

use oxitune_ym::{Ym3File, delta_encode};
use std::path::Path;

pub fn cmd_delta(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let ym = Ym3File::parse(&data)?;

    let delta = delta_encode(&ym);
    println!("Delta size: {} -> {}", ym.body().len(), delta.len());

    std::fs::write(output, &delta)?;
    Ok(())
}

//! Unpack command implementation.

use oxitune_ym::unpack_ym;
use std::path::Path;

use super::pack::{Format, PackMode};

pub fn cmd_unpack(
    input: &Path,
    output: &Path,
    format: Format,
    mode: PackMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let ym = unpack_ym(&data, mode.mode(), format.kind())?;

    let bytes = ym.to_bytes();
    std::fs::write(output, &bytes)?;

    println!(
        "Unpacked {} frames ({} bytes) to {}",
        ym.frames(),
        bytes.len(),
        output.display()
    );
    Ok(())
}

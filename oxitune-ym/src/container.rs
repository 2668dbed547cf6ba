//! Packing modes and the packed-container layout.
//!
//! Registers and grouped mode wrap their streams in a small container:
//!
//! ```text
//! u16 BE    frame count
//! u32 BE    absolute file offset of stream 0 (always stream_count * 4 + 2)
//! ...       one offset per stream, ascending
//! bytes     the compressed streams, back to back
//! ```
//!
//! Whole mode writes the bare compressed stream with no header. The
//! container records neither mode nor format; the unpacker must be told
//! both, exactly as the packer was.

use oxitune_core::bytestream::ByteReader;
use oxitune_core::error::{OxituneError, Result};
use oxitune_lz::{FormatKind, TokenStats, pack_verified_with_stats, unpack};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::channels::{deinterleave, interleave};
use crate::ym3::{YM_REGISTERS, Ym3File};

/// Register pairs interleaved by the grouped mode, in stream order.
pub const GROUPED_PAIRS: [(usize, usize); 4] = [(0, 1), (2, 3), (4, 5), (11, 12)];

/// Registers packed singly by the grouped mode, in stream order.
pub const GROUPED_SINGLES: [usize; 6] = [6, 7, 8, 9, 10, 13];

/// Stream layout used when packing an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fourteen independent register streams.
    #[default]
    Registers,
    /// Four interleaved register pairs, then six single registers.
    Grouped,
    /// The whole register-major body as one bare stream.
    Whole,
}

impl Mode {
    /// Number of streams this mode produces.
    pub fn stream_count(&self) -> usize {
        match self {
            Mode::Registers => YM_REGISTERS,
            Mode::Grouped => GROUPED_PAIRS.len() + GROUPED_SINGLES.len(),
            Mode::Whole => 1,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Registers => write!(f, "registers"),
            Mode::Grouped => write!(f, "grouped"),
            Mode::Whole => write!(f, "whole"),
        }
    }
}

/// One stream to be packed: its input bytes and packing parameters.
#[derive(Debug, Clone)]
pub struct StreamPlan {
    /// Display label ("reg 3", "regs 0+1", "whole").
    pub label: String,
    /// Raw bytes of the stream.
    pub data: Vec<u8>,
    /// Unit granularity (2 for interleaved pairs).
    pub multiple: usize,
    /// Search window for this stream, in bytes.
    pub search_distance: usize,
}

/// One compressed stream with its reporting detail.
#[derive(Debug, Clone)]
pub struct PackedStream {
    /// Display label carried over from the plan.
    pub label: String,
    /// Raw input length in bytes.
    pub raw_len: usize,
    /// Compressed bytes.
    pub bytes: Vec<u8>,
    /// Token statistics from the pack.
    pub stats: TokenStats,
}

/// A fully packed image: the output file plus per-stream detail.
#[derive(Debug, Clone)]
pub struct PackedYm {
    /// The bytes to write: a container, or the bare stream for whole mode.
    pub bytes: Vec<u8>,
    /// Frame count of the source image.
    pub frames: usize,
    /// Per-stream detail in container order.
    pub streams: Vec<PackedStream>,
}

/// Lay out the streams a mode packs, in container order.
///
/// Grouped pairs are interleaved two-byte units searched over twice the
/// window, so the pair window covers the same number of frames as a
/// single-register stream.
pub fn plan_streams(ym: &Ym3File, mode: Mode, search_distance: usize) -> Vec<StreamPlan> {
    match mode {
        Mode::Registers => (0..YM_REGISTERS)
            .map(|r| StreamPlan {
                label: format!("reg {}", r),
                data: ym.register(r).to_vec(),
                multiple: 1,
                search_distance,
            })
            .collect(),
        Mode::Grouped => {
            let mut plans = Vec::with_capacity(Mode::Grouped.stream_count());
            for (r0, r1) in GROUPED_PAIRS {
                plans.push(StreamPlan {
                    label: format!("regs {}+{}", r0, r1),
                    data: interleave(ym.register(r0), ym.register(r1)),
                    multiple: 2,
                    search_distance: search_distance * 2,
                });
            }
            for r in GROUPED_SINGLES {
                plans.push(StreamPlan {
                    label: format!("reg {}", r),
                    data: ym.register(r).to_vec(),
                    multiple: 1,
                    search_distance,
                });
            }
            plans
        }
        Mode::Whole => vec![StreamPlan {
            label: "whole".to_string(),
            data: ym.body().to_vec(),
            multiple: 1,
            search_distance,
        }],
    }
}

/// Write the container around already-compressed streams.
pub fn write_container(frames: usize, streams: &[Vec<u8>]) -> Result<Vec<u8>> {
    if frames > u16::MAX as usize {
        return Err(OxituneError::invalid_header(format!(
            "frame count {} exceeds the container's 16-bit field",
            frames
        )));
    }
    let base = streams.len() * 4 + 2;
    let total: usize = streams.iter().map(|s| s.len()).sum();
    if base + total > u32::MAX as usize {
        return Err(OxituneError::invalid_header(format!(
            "packed size {} exceeds the container's 32-bit offsets",
            base + total
        )));
    }

    let mut out = Vec::with_capacity(base + total);
    out.extend_from_slice(&(frames as u16).to_be_bytes());
    let mut offset = base;
    for stream in streams {
        out.extend_from_slice(&(offset as u32).to_be_bytes());
        offset += stream.len();
    }
    for stream in streams {
        out.extend_from_slice(stream);
    }
    Ok(out)
}

fn finish(
    frames: usize,
    mode: Mode,
    plans: Vec<StreamPlan>,
    results: Vec<(Vec<u8>, TokenStats)>,
) -> Result<PackedYm> {
    let (payloads, stats): (Vec<Vec<u8>>, Vec<TokenStats>) = results.into_iter().unzip();
    let bytes = match mode {
        Mode::Whole => payloads[0].clone(),
        _ => write_container(frames, &payloads)?,
    };
    let streams = plans
        .into_iter()
        .zip(payloads)
        .zip(stats)
        .map(|((plan, bytes), stats)| PackedStream {
            label: plan.label,
            raw_len: plan.data.len(),
            bytes,
            stats,
        })
        .collect();
    Ok(PackedYm {
        bytes,
        frames,
        streams,
    })
}

/// Pack an image with the given mode, format, and search window.
///
/// Every stream is verified to decode back byte-exact before the
/// container is assembled.
pub fn pack_ym(
    ym: &Ym3File,
    mode: Mode,
    kind: FormatKind,
    search_distance: usize,
) -> Result<PackedYm> {
    let plans = plan_streams(ym, mode, search_distance);
    let results = plans
        .iter()
        .map(|p| pack_verified_with_stats(&p.data, p.multiple, p.search_distance, kind))
        .collect::<Result<Vec<_>>>()?;
    finish(ym.frames(), mode, plans, results)
}

/// [`pack_ym`] with the independent streams compressed in parallel.
///
/// Output is identical to the serial version.
#[cfg(feature = "parallel")]
pub fn pack_ym_parallel(
    ym: &Ym3File,
    mode: Mode,
    kind: FormatKind,
    search_distance: usize,
) -> Result<PackedYm> {
    let plans = plan_streams(ym, mode, search_distance);
    let results = plans
        .par_iter()
        .map(|p| pack_verified_with_stats(&p.data, p.multiple, p.search_distance, kind))
        .collect::<Result<Vec<_>>>()?;
    finish(ym.frames(), mode, plans, results)
}

fn split_container(input: &[u8], stream_count: usize) -> Result<(usize, Vec<&[u8]>)> {
    let mut reader = ByteReader::new(input);
    let frames = reader.read_u16_be()? as usize;
    let base = stream_count * 4 + 2;

    let mut offsets = Vec::with_capacity(stream_count);
    for _ in 0..stream_count {
        offsets.push(reader.read_u32_be()? as usize);
    }
    if offsets[0] != base {
        return Err(OxituneError::invalid_header(format!(
            "first stream offset {} does not match table size {}",
            offsets[0], base
        )));
    }

    let mut streams = Vec::with_capacity(stream_count);
    for i in 0..stream_count {
        let start = offsets[i];
        let end = if i + 1 < stream_count {
            offsets[i + 1]
        } else {
            input.len()
        };
        if start > end || end > input.len() {
            return Err(OxituneError::invalid_header(format!(
                "stream {} spans {}..{} outside the container of {} bytes",
                i,
                start,
                end,
                input.len()
            )));
        }
        streams.push(&input[start..end]);
    }
    Ok((frames, streams))
}

fn decode_stream(
    stream: &[u8],
    multiple: usize,
    expected: usize,
    kind: FormatKind,
) -> Result<Vec<u8>> {
    let decoded = unpack(stream, multiple, kind)?;
    if decoded.len() != expected {
        return Err(OxituneError::invalid_header(format!(
            "stream decoded to {} bytes, expected {}",
            decoded.len(),
            expected
        )));
    }
    Ok(decoded)
}

/// Unpack a file produced by [`pack_ym`] back into a register image.
///
/// `mode` and `kind` must match the values used to pack.
pub fn unpack_ym(input: &[u8], mode: Mode, kind: FormatKind) -> Result<Ym3File> {
    if mode == Mode::Whole {
        return Ym3File::from_body(unpack(input, 1, kind)?);
    }

    let (frames, streams) = split_container(input, mode.stream_count())?;
    let mut registers: [Vec<u8>; YM_REGISTERS] = std::array::from_fn(|_| Vec::new());

    if mode == Mode::Registers {
        for (r, stream) in streams.iter().enumerate() {
            registers[r] = decode_stream(stream, 1, frames, kind)?;
        }
    } else {
        let (pairs, singles) = streams.split_at(GROUPED_PAIRS.len());
        for ((r0, r1), stream) in GROUPED_PAIRS.into_iter().zip(pairs) {
            let merged = decode_stream(stream, 2, frames * 2, kind)?;
            let (a, b) = deinterleave(&merged);
            registers[r0] = a;
            registers[r1] = b;
        }
        for (r, stream) in GROUPED_SINGLES.into_iter().zip(singles) {
            registers[r] = decode_stream(stream, 1, frames, kind)?;
        }
    }
    Ym3File::from_registers(&registers)
}

//! YM3 register images and multi-stream packing on top of oxitune-lz.
//!
//! This crate understands the YM3 chiptune capture format (fourteen
//! register streams in a register-major body) and packs it for small
//! players: per-register streams, grouped register pairs as two-byte
//! units, or the whole body as one stream, wrapped in a compact
//! offset-table container.
//!
//! # Example
//!
//! ```
//! use oxitune_lz::FormatKind;
//! use oxitune_ym::{Mode, Ym3File, pack_ym, unpack_ym};
//!
//! let mut image = b"YM3!".to_vec();
//! image.extend(std::iter::repeat_n(0u8, 14 * 100));
//!
//! let ym = Ym3File::parse(&image).unwrap();
//! let packed = pack_ym(&ym, Mode::Registers, FormatKind::V1, 512).unwrap();
//! let back = unpack_ym(&packed.bytes, Mode::Registers, FormatKind::V1).unwrap();
//! assert_eq!(back.to_bytes(), image);
//! ```

pub mod channels;
pub mod container;
pub mod delta;
pub mod ym3;

pub use channels::{deinterleave, interleave};
pub use container::{
    GROUPED_PAIRS, GROUPED_SINGLES, Mode, PackedStream, PackedYm, StreamPlan, pack_ym,
    plan_streams, unpack_ym, write_container,
};
pub use delta::delta_encode;
pub use ym3::{REGISTER_NAMES, YM3_MAGIC, YM_REGISTERS, Ym3File};

#[cfg(feature = "parallel")]
pub use container::pack_ym_parallel;

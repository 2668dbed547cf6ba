//! Recency-cache LZ77 compressor for fixed-width register streams.
//!
//! The compressor targets byte streams with a small alphabet and strong
//! short-range repetition, the shape of AY/YM sound-chip register captures.
//! A per-byte-value recency cache proposes candidate back-references, each
//! candidate is scored by the selected wire format's cost model, and a
//! greedy tokenizer turns the input into literal/match tokens that either
//! of two formats can serialize:
//!
//! - [`FormatV1`]: one record per token, 7-bit-plus-extension counts and a
//!   chained offset encoding with no distance ceiling
//! - [`FormatV2`]: lzsa-style records packing a literal run and a match
//!   behind a shared nibble header, offsets up to 65535 units
//!
//! All counts and offsets are multiples of a caller-chosen granularity
//! `multiple` (1, or 2 for interleaved register pairs treated as atomic
//! units), and decoding is byte-exact.
//!
//! # Example
//!
//! ```
//! use oxitune_lz::{FormatKind, pack, unpack};
//!
//! let data = b"ABCABCABCABCABC";
//! let packed = pack(data, 1, 512, FormatKind::V1).unwrap();
//! let unpacked = unpack(&packed, 1, FormatKind::V1).unwrap();
//! assert_eq!(unpacked, data);
//! ```

pub mod cache;
pub mod finder;
pub mod stats;
pub mod token;
pub mod tokenizer;

mod format_v1;
mod format_v2;

pub use cache::RecencyCache;
pub use finder::{RawMatch, find_match};
pub use format_v1::FormatV1;
pub use format_v2::FormatV2;
pub use stats::TokenStats;
pub use token::{Token, expand_tokens};
pub use tokenizer::create_tokens;

use oxitune_core::error::{OxituneError, Result};

/// Cost model and wire codec of one pack format.
///
/// The cost model feeds the match finder: it estimates the encoded size of
/// a match so candidates can be ranked in bytes spent per byte reproduced.
/// Formats are stateless; the two implementations are selected through
/// [`FormatKind`].
pub trait PackFormat {
    /// Estimated encoded size in bytes of a match of `count` raw bytes at
    /// `offset`, both exact multiples of `multiple`.
    fn cost(&self, count: usize, offset: usize, multiple: usize) -> usize;

    /// Serialize a token stream.
    fn encode(&self, tokens: &[Token], multiple: usize) -> Result<Vec<u8>>;

    /// Reconstruct the raw bytes of a stream produced by `encode`.
    fn decode(&self, input: &[u8], multiple: usize) -> Result<Vec<u8>>;
}

/// Selector for the two wire formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    /// Byte-count / chained-offset format.
    #[default]
    V1,
    /// Nibble-header format.
    V2,
}

impl FormatKind {
    /// The format implementation behind this selector.
    pub fn format(&self) -> &'static dyn PackFormat {
        match self {
            FormatKind::V1 => &FormatV1,
            FormatKind::V2 => &FormatV2,
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::V1 => write!(f, "v1"),
            FormatKind::V2 => write!(f, "v2"),
        }
    }
}

fn validate(data: &[u8], multiple: usize) -> Result<()> {
    if multiple == 0 || data.len() % multiple != 0 {
        return Err(OxituneError::invalid_multiple(multiple, data.len()));
    }
    Ok(())
}

pub(crate) fn validate_tokens(tokens: &[Token], multiple: usize) -> Result<()> {
    if multiple == 0 {
        return Err(OxituneError::invalid_multiple(multiple, 0));
    }
    for token in tokens {
        match token {
            Token::Literal(bytes) => {
                if bytes.len() % multiple != 0 {
                    return Err(OxituneError::invalid_multiple(multiple, bytes.len()));
                }
            }
            Token::Match { count, offset } => {
                if count % multiple != 0 {
                    return Err(OxituneError::invalid_multiple(multiple, *count));
                }
                if offset % multiple != 0 {
                    return Err(OxituneError::invalid_multiple(multiple, *offset));
                }
            }
        }
    }
    Ok(())
}

/// Back-copy `count` bytes from `offset` behind the end of `output`.
///
/// Copies byte by byte so a run may overlap its own output when
/// `offset < count`.
pub(crate) fn copy_back(output: &mut Vec<u8>, offset: usize, count: usize) -> Result<()> {
    if offset == 0 || offset > output.len() {
        return Err(OxituneError::invalid_distance(offset, output.len()));
    }
    let start = output.len() - offset;
    for i in 0..count {
        let byte = output[start + i];
        output.push(byte);
    }
    Ok(())
}

/// Compress `data` with the given window, granularity, and format.
///
/// `data.len()` must be an exact multiple of `multiple`.
pub fn pack(
    data: &[u8],
    multiple: usize,
    search_distance: usize,
    kind: FormatKind,
) -> Result<Vec<u8>> {
    validate(data, multiple)?;
    let format = kind.format();
    let tokens = create_tokens(data, search_distance, multiple, format);
    format.encode(&tokens, multiple)
}

/// Decompress a stream produced by [`pack`] with the same granularity and
/// format.
pub fn unpack(data: &[u8], multiple: usize, kind: FormatKind) -> Result<Vec<u8>> {
    if multiple == 0 {
        return Err(OxituneError::invalid_multiple(multiple, data.len()));
    }
    kind.format().decode(data, multiple)
}

/// Compress `data` and verify the result decodes back byte-exact.
pub fn pack_verified(
    data: &[u8],
    multiple: usize,
    search_distance: usize,
    kind: FormatKind,
) -> Result<Vec<u8>> {
    let (packed, _) = pack_verified_with_stats(data, multiple, search_distance, kind)?;
    Ok(packed)
}

/// [`pack_verified`], also returning token statistics for reporting.
pub fn pack_verified_with_stats(
    data: &[u8],
    multiple: usize,
    search_distance: usize,
    kind: FormatKind,
) -> Result<(Vec<u8>, TokenStats)> {
    validate(data, multiple)?;
    let format = kind.format();
    let tokens = create_tokens(data, search_distance, multiple, format);
    let stats = TokenStats::from_tokens(&tokens);
    let packed = format.encode(&tokens, multiple)?;

    let unpacked = format.decode(&packed, multiple)?;
    if unpacked != data {
        let offset = unpacked
            .iter()
            .zip(data.iter())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| unpacked.len().min(data.len()));
        return Err(OxituneError::verify_failed(offset));
    }
    Ok((packed, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_v1() {
        let data = b"ABCABCABC";
        let packed = pack(data, 1, 512, FormatKind::V1).unwrap();
        assert_eq!(packed, vec![0x83, b'A', b'B', b'C', 0x06, 0x03]);
        assert_eq!(unpack(&packed, 1, FormatKind::V1).unwrap(), data);
    }

    #[test]
    fn test_pack_unpack_v2() {
        let data = b"ABCABCABC";
        let packed = pack(data, 1, 512, FormatKind::V2).unwrap();
        assert_eq!(packed, vec![0x36, b'A', b'B', b'C', 0x03]);
        assert_eq!(unpack(&packed, 1, FormatKind::V2).unwrap(), data);
    }

    #[test]
    fn test_zero_run_ratio() {
        let data = vec![0u8; 1000];
        for kind in [FormatKind::V1, FormatKind::V2] {
            let packed = pack(&data, 1, 512, kind).unwrap();
            assert!(
                packed.len() < 50,
                "{} bytes for 1000 zeros with {}",
                packed.len(),
                kind
            );
            assert_eq!(unpack(&packed, 1, kind).unwrap(), data);
        }
    }

    #[test]
    fn test_empty_input() {
        for kind in [FormatKind::V1, FormatKind::V2] {
            let packed = pack(&[], 1, 512, kind).unwrap();
            assert!(packed.is_empty());
            assert_eq!(unpack(&packed, 1, kind).unwrap(), Vec::<u8>::new());
        }
    }

    #[test]
    fn test_zero_multiple_rejected() {
        assert!(matches!(
            pack(b"AB", 0, 512, FormatKind::V1),
            Err(OxituneError::InvalidMultiple { multiple: 0, .. })
        ));
        assert!(matches!(
            unpack(b"AB", 0, FormatKind::V1),
            Err(OxituneError::InvalidMultiple { multiple: 0, .. })
        ));
    }

    #[test]
    fn test_misaligned_input_rejected() {
        assert!(matches!(
            pack(b"ABC", 2, 512, FormatKind::V1),
            Err(OxituneError::InvalidMultiple { multiple: 2, len: 3 })
        ));
    }

    #[test]
    fn test_pack_verified_returns_stats() {
        let data = b"ABCABCABCABCABCABC";
        let (packed, stats) = pack_verified_with_stats(data, 1, 512, FormatKind::V1).unwrap();
        assert_eq!(stats.total_bytes(), data.len());
        assert_eq!(stats.literal_bytes, 3);
        assert_eq!(stats.match_bytes, 15);
        assert_eq!(unpack(&packed, 1, FormatKind::V1).unwrap(), data);
    }

    #[test]
    fn test_format_kind_display() {
        assert_eq!(FormatKind::V1.to_string(), "v1");
        assert_eq!(FormatKind::V2.to_string(), "v2");
        assert_eq!(FormatKind::default(), FormatKind::V1);
    }
}

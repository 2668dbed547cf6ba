//! Byte interleaving for paired register streams.
//!
//! The grouped packing mode treats related register pairs (a period's fine
//! and coarse bytes) as one stream of two-byte units, so that a repeated
//! 16-bit value is a single repeated unit for the match finder.

/// Alternate the bytes of two equal-length streams: `a0 b0 a1 b1 ...`.
pub fn interleave(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert_eq!(a.len(), b.len());
    let mut out = Vec::with_capacity(a.len() + b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        out.push(*x);
        out.push(*y);
    }
    out
}

/// Split an interleaved stream back into its two sources. The input length
/// must be even.
pub fn deinterleave(ab: &[u8]) -> (Vec<u8>, Vec<u8>) {
    debug_assert_eq!(ab.len() % 2, 0);
    let mut a = Vec::with_capacity(ab.len() / 2);
    let mut b = Vec::with_capacity(ab.len() / 2);
    for pair in ab.chunks_exact(2) {
        a.push(pair[0]);
        b.push(pair[1]);
    }
    (a, b)
}

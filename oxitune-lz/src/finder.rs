//! Candidate match search over the recency cache.
//!
//! The finder is greedy and local: at one position it scores every cached
//! candidate within the window and keeps the one with the lowest encoded
//! cost per byte, without any lookahead. A candidate only wins if it beats
//! literal encoding outright, so a "match" that would spend one byte per
//! byte is rejected even when nothing else competes.

use crate::PackFormat;
use crate::cache::RecencyCache;

/// Minimum raw-byte run length worth scoring, after quantization.
const MIN_MATCH: usize = 3;

/// A profitable back-reference found at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    /// Distance back to the matched run, in raw bytes.
    pub offset: usize,
    /// Length of the matched run, in raw bytes.
    pub count: usize,
}

/// Find the cheapest profitable match for `data[pos..]`.
///
/// Candidates come from the cache newest first, so the scan stops as soon
/// as a candidate falls outside `max_distance`. Runs are quantized down to
/// a multiple of `multiple` and may overlap the current position (a run
/// longer than its offset repeats itself, which the decoders reproduce by
/// copying byte by byte). Returns `None` when no candidate costs strictly
/// less than one output byte per input byte.
pub fn find_match(
    data: &[u8],
    pos: usize,
    max_distance: usize,
    multiple: usize,
    format: &dyn PackFormat,
    cache: &RecencyCache,
) -> Option<RawMatch> {
    let mut best: Option<RawMatch> = None;
    let mut best_cost = 1.0f64;

    for test_pos in cache.positions(data[pos]) {
        let offset = pos - test_pos;
        if offset > max_distance {
            break;
        }
        if offset % multiple != 0 {
            continue;
        }

        let mut count = 0;
        while pos + count < data.len() && data[pos + count] == data[test_pos + count] {
            count += 1;
        }

        count = (count / multiple) * multiple;
        if count < MIN_MATCH {
            continue;
        }

        let cost = format.cost(count, offset, multiple) as f64 / count as f64;
        if cost < best_cost {
            best = Some(RawMatch { offset, count });
            best_cost = cost;
        }
    }

    best
}

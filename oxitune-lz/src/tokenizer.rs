//! Greedy token construction over a whole input buffer.

use crate::PackFormat;
use crate::cache::RecencyCache;
use crate::finder::find_match;
use crate::token::Token;

/// Segment `data` into literal and match tokens.
///
/// The cursor advances by whole units: a winning match consumes its full
/// run, anything else grows the pending literal by `multiple` bytes. Every
/// consumed byte is recorded in the recency cache and positions behind the
/// search window are culled, so candidate lists stay short. The pending
/// literal is flushed before each match token and once more at the end of
/// input.
///
/// `data.len()` must be a multiple of `multiple`; the public entry points
/// in this crate validate that before calling here.
pub fn create_tokens(
    data: &[u8],
    search_distance: usize,
    multiple: usize,
    format: &dyn PackFormat,
) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut open_literal: Vec<u8> = Vec::new();
    let mut cache = RecencyCache::new();
    let mut pos = 0;

    while pos < data.len() {
        let found = find_match(data, pos, search_distance, multiple, format, &cache);
        match found {
            Some(m) if m.count > multiple => {
                for _ in 0..m.count {
                    cache.add(data[pos], pos);
                    cache.cull(data[pos], pos.saturating_sub(search_distance));
                    pos += 1;
                }
                if !open_literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut open_literal)));
                }
                tokens.push(Token::Match {
                    count: m.count,
                    offset: m.offset,
                });
            }
            _ => {
                for _ in 0..multiple {
                    open_literal.push(data[pos]);
                    cache.add(data[pos], pos);
                    cache.cull(data[pos], pos.saturating_sub(search_distance));
                    pos += 1;
                }
            }
        }
    }

    if !open_literal.is_empty() {
        tokens.push(Token::Literal(open_literal));
    }
    tokens
}

//! Summary statistics over a finished token stream.

use crate::token::Token;

/// Aggregate counts derived from a token stream, used for reporting how
/// well a stream packed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStats {
    /// Number of literal tokens.
    pub literal_tokens: usize,
    /// Number of match tokens.
    pub match_tokens: usize,
    /// Raw bytes carried verbatim by literal tokens.
    pub literal_bytes: usize,
    /// Raw bytes reproduced by match tokens.
    pub match_bytes: usize,
    /// Smallest and largest match offset seen.
    pub offset_range: Option<(usize, usize)>,
    /// Smallest and largest match length seen.
    pub count_range: Option<(usize, usize)>,
}

impl TokenStats {
    /// Derive statistics from a token stream.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut stats = Self::default();
        for token in tokens {
            match token {
                Token::Literal(bytes) => {
                    stats.literal_tokens += 1;
                    stats.literal_bytes += bytes.len();
                }
                Token::Match { count, offset } => {
                    stats.match_tokens += 1;
                    stats.match_bytes += count;
                    stats.offset_range = Some(match stats.offset_range {
                        None => (*offset, *offset),
                        Some((lo, hi)) => (lo.min(*offset), hi.max(*offset)),
                    });
                    stats.count_range = Some(match stats.count_range {
                        None => (*count, *count),
                        Some((lo, hi)) => (lo.min(*count), hi.max(*count)),
                    });
                }
            }
        }
        stats
    }

    /// Total raw bytes the stream expands to.
    pub fn total_bytes(&self) -> usize {
        self.literal_bytes + self.match_bytes
    }

    /// Share of raw bytes covered by matches, in percent.
    pub fn match_percent(&self) -> f64 {
        let total = self.total_bytes();
        if total == 0 {
            return 0.0;
        }
        100.0 * self.match_bytes as f64 / total as f64
    }
}

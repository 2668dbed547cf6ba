//! Format-independent token representation of compressed content.
//!
//! A token stream is a loss-free segmentation of the input: expanding the
//! tokens in order reproduces the input byte for byte. The tokenizer never
//! emits two consecutive `Literal` tokens, and every count and offset is an
//! exact multiple of the unit granularity it was built with.

use oxitune_core::error::{OxituneError, Result};

/// One segment of a token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of raw bytes copied verbatim.
    Literal(Vec<u8>),
    /// A back-reference into already reconstructed output.
    Match {
        /// Number of bytes to copy.
        count: usize,
        /// Distance back from the current output position.
        offset: usize,
    },
}

impl Token {
    /// Number of raw bytes this token expands to.
    pub fn expanded_len(&self) -> usize {
        match self {
            Token::Literal(bytes) => bytes.len(),
            Token::Match { count, .. } => *count,
        }
    }
}

/// Expand a token stream back into raw bytes.
///
/// Matches may overlap their own output (`offset < count`); the copy is
/// performed byte by byte, as the format decoders do it.
pub fn expand_tokens(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(tokens.iter().map(Token::expanded_len).sum());
    for token in tokens {
        match token {
            Token::Literal(bytes) => output.extend_from_slice(bytes),
            Token::Match { count, offset } => {
                if *offset == 0 || *offset > output.len() {
                    return Err(OxituneError::invalid_distance(*offset, output.len()));
                }
                let start = output.len() - offset;
                for i in 0..*count {
                    let byte = output[start + i];
                    output.push(byte);
                }
            }
        }
    }
    Ok(output)
}

//! Pack format v1: byte-count / chained-offset encoding.
//!
//! Stream layout, one record per token:
//! - header byte: bit 7 set for a literal run, clear for a match; low 7
//!   bits hold the unit count, or 0 when a 2-byte big-endian unit count
//!   follows
//! - literal run: the raw bytes
//! - match: the offset as a chain of `0x00` bytes each standing for 255
//!   units, closed by a nonzero byte carrying the remainder
//!
//! Counts and offsets are stored in units of the granularity and scaled
//! back up when decoding.

use crate::copy_back;
use crate::token::Token;
use oxitune_core::bytestream::ByteReader;
use oxitune_core::error::Result;

/// Header flag marking a literal run.
const LITERAL_FLAG: u8 = 0x80;

/// Largest unit count one record can carry.
const MAX_UNITS: usize = 0xFFFF;

/// Byte-count / chained-offset format.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatV1;

fn push_count(output: &mut Vec<u8>, units: usize, flag: u8) {
    debug_assert!(units > 0 && units <= MAX_UNITS);
    if units < 128 {
        output.push(units as u8 | flag);
    } else {
        output.push(flag);
        output.push((units >> 8) as u8);
        output.push((units & 0xFF) as u8);
    }
}

fn push_offset(output: &mut Vec<u8>, mut units: usize) {
    debug_assert!(units > 0);
    while units >= 256 {
        output.push(0);
        units -= 255;
    }
    output.push(units as u8);
}

impl super::PackFormat for FormatV1 {
    fn cost(&self, count: usize, offset: usize, multiple: usize) -> usize {
        let count = count / multiple;
        let mut offset = offset / multiple;

        // Count header + terminal offset byte
        let mut cost = 2;
        if count >= 128 {
            cost += 2;
        }
        while offset >= 256 {
            cost += 1;
            offset -= 255;
        }
        cost
    }

    fn encode(&self, tokens: &[Token], multiple: usize) -> Result<Vec<u8>> {
        crate::validate_tokens(tokens, multiple)?;

        let mut output = Vec::new();
        for token in tokens {
            match token {
                Token::Literal(bytes) => {
                    for chunk in bytes.chunks(MAX_UNITS * multiple) {
                        push_count(&mut output, chunk.len() / multiple, LITERAL_FLAG);
                        output.extend_from_slice(chunk);
                    }
                }
                Token::Match { count, offset } => {
                    let mut units = count / multiple;
                    let offset_units = offset / multiple;
                    while units > 0 {
                        let take = units.min(MAX_UNITS);
                        push_count(&mut output, take, 0);
                        push_offset(&mut output, offset_units);
                        units -= take;
                    }
                }
            }
        }
        Ok(output)
    }

    fn decode(&self, input: &[u8], multiple: usize) -> Result<Vec<u8>> {
        let mut reader = ByteReader::new(input);
        let mut output = Vec::new();

        while !reader.is_empty() {
            let cmd = reader.next_byte()?;
            let mut count = (cmd & 0x7F) as usize;
            if count == 0 {
                count = reader.read_u16_be()? as usize;
            }
            count *= multiple;

            if cmd & LITERAL_FLAG != 0 {
                let bytes = reader.take(count)?;
                output.extend_from_slice(bytes);
            } else {
                let mut offset = 0usize;
                loop {
                    let tmp = reader.next_byte()?;
                    if tmp != 0 {
                        offset += tmp as usize;
                        break;
                    }
                    offset += 255;
                }
                offset *= multiple;
                if count > 0 {
                    copy_back(&mut output, offset, count)?;
                }
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackFormat;
    use oxitune_core::error::OxituneError;

    fn lit(bytes: &[u8]) -> Token {
        Token::Literal(bytes.to_vec())
    }

    fn mat(count: usize, offset: usize) -> Token {
        Token::Match { count, offset }
    }

    #[test]
    fn test_short_literal_wire_layout() {
        let encoded = FormatV1.encode(&[lit(b"ABC")], 1).unwrap();
        assert_eq!(encoded, vec![0x83, b'A', b'B', b'C']);
    }

    #[test]
    fn test_match_wire_layout() {
        let encoded = FormatV1.encode(&[lit(b"ABC"), mat(6, 3)], 1).unwrap();
        assert_eq!(encoded, vec![0x83, b'A', b'B', b'C', 0x06, 0x03]);
        assert_eq!(FormatV1.decode(&encoded, 1).unwrap(), b"ABCABCABC");
    }

    #[test]
    fn test_long_count_extension() {
        // 128 units switch to the 2-byte count form
        let bytes = vec![0x7Au8; 128];
        let encoded = FormatV1.encode(&[lit(&bytes)], 1).unwrap();
        assert_eq!(&encoded[..3], &[0x80, 0x00, 0x80]);
        assert_eq!(FormatV1.decode(&encoded, 1).unwrap(), bytes);

        // 127 units still fit the header
        let bytes = vec![0x7Au8; 127];
        let encoded = FormatV1.encode(&[lit(&bytes)], 1).unwrap();
        assert_eq!(encoded[0], 0x80 | 127);
    }

    #[test]
    fn test_chained_offset_layout() {
        // Offsets beyond 255 units chain zero bytes worth 255 each
        let encoded = FormatV1.encode(&[mat(4, 300)], 1).unwrap();
        assert_eq!(encoded, vec![0x04, 0x00, 0x2D]);

        let encoded = FormatV1.encode(&[mat(4, 255)], 1).unwrap();
        assert_eq!(encoded, vec![0x04, 0xFF]);

        let encoded = FormatV1.encode(&[mat(4, 256)], 1).unwrap();
        assert_eq!(encoded, vec![0x04, 0x00, 0x01]);

        let encoded = FormatV1.encode(&[mat(4, 510)], 1).unwrap();
        assert_eq!(encoded, vec![0x04, 0x00, 0xFF]);

        let encoded = FormatV1.encode(&[mat(4, 511)], 1).unwrap();
        assert_eq!(encoded, vec![0x04, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_units_scale_with_multiple() {
        let encoded = FormatV1.encode(&[lit(b"AB"), mat(8, 2)], 2).unwrap();
        // 1 literal unit, 4 match units, offset 1 unit
        assert_eq!(encoded, vec![0x81, b'A', b'B', 0x04, 0x01]);
        assert_eq!(FormatV1.decode(&encoded, 2).unwrap(), b"ABABABABAB");
    }

    #[test]
    fn test_cost_model() {
        let f = FormatV1;
        assert_eq!(f.cost(6, 3, 1), 2);
        assert_eq!(f.cost(127, 255, 1), 2);
        assert_eq!(f.cost(128, 3, 1), 4);
        assert_eq!(f.cost(6, 256, 1), 3);
        assert_eq!(f.cost(6, 511, 1), 4);
        assert_eq!(f.cost(254, 2, 2), 2);
        assert_eq!(f.cost(256, 512, 2), 5);
    }

    #[test]
    fn test_decode_overlapping_match() {
        // Seed byte then a self-extending run
        let encoded = FormatV1.encode(&[lit(&[9]), mat(9, 1)], 1).unwrap();
        assert_eq!(FormatV1.decode(&encoded, 1).unwrap(), vec![9u8; 10]);
    }

    #[test]
    fn test_oversized_literal_split() {
        let bytes = vec![0x31u8; 70000];
        let encoded = FormatV1.encode(&[lit(&bytes)], 1).unwrap();
        // First record carries 65535 units, the second the remaining 4465
        assert_eq!(&encoded[..3], &[0x80, 0xFF, 0xFF]);
        assert_eq!(FormatV1.decode(&encoded, 1).unwrap(), bytes);
    }

    #[test]
    fn test_oversized_match_split() {
        let encoded = FormatV1.encode(&[lit(&[5]), mat(70000, 1)], 1).unwrap();
        assert_eq!(FormatV1.decode(&encoded, 1).unwrap(), vec![5u8; 70001]);
    }

    #[test]
    fn test_decode_truncated_literal() {
        let result = FormatV1.decode(&[0x85, b'A', b'B'], 1);
        assert!(matches!(result, Err(OxituneError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_decode_truncated_offset() {
        let result = FormatV1.decode(&[0x04], 1);
        assert!(matches!(result, Err(OxituneError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_decode_offset_beyond_history() {
        let result = FormatV1.decode(&[0x81, 0x11, 0x04, 0x05], 1);
        assert!(matches!(
            result,
            Err(OxituneError::InvalidDistance {
                distance: 5,
                history_size: 1
            })
        ));
    }

    #[test]
    fn test_empty_stream() {
        assert!(FormatV1.encode(&[], 1).unwrap().is_empty());
        assert!(FormatV1.decode(&[], 1).unwrap().is_empty());
    }

    #[test]
    fn test_misaligned_token_rejected() {
        let result = FormatV1.encode(&[lit(b"ABC")], 2);
        assert!(matches!(
            result,
            Err(OxituneError::InvalidMultiple { multiple: 2, len: 3 })
        ));
    }
}

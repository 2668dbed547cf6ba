//! Pack format v2: nibble-header encoding, lzsa style.
//!
//! Each record is an optional literal run followed by a match:
//!
//! ```text
//! 7 6 5 4 3 2 1 0
//! O L L L M M M M    O = long-offset flag
//! ```
//!
//! `L` is the literal unit count saturating at 7, `M` the match unit count
//! saturating at 15; a saturated nibble is followed by an extension after
//! the position it belongs to (literal extension before the payload, match
//! extension after it). The offset closes the record: one byte, or two
//! big-endian bytes when the flag is set.
//!
//! Extension rule for a saturated nibble with base `already` (7 or 15),
//! reading one byte `v`:
//! - `v <= 253`: count = `already + v`
//! - `v == 254`: one more byte `w`, count = `already + 254 + w`
//! - `v == 255`: two more bytes, big-endian, replacing the count outright
//!
//! A final literal run with no match after it pairs with a zero match
//! (match nibble 0, offset byte 0), which decodes as a no-op.

use crate::copy_back;
use crate::token::Token;
use oxitune_core::bytestream::ByteReader;
use oxitune_core::error::{OxituneError, Result};

/// Header flag for a two-byte offset.
const LONG_OFFSET: u8 = 0x80;

/// Largest unit count one record can carry.
const MAX_UNITS: usize = 0xFFFF;

/// Largest unit offset the two-byte form can carry.
const MAX_OFFSET_UNITS: usize = 0xFFFF;

/// Nibble-header format.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatV2;

fn push_ext_count(output: &mut Vec<u8>, count: usize, already: usize) {
    if count <= 253 + already {
        output.push((count - already) as u8);
    } else if count + already + 254 <= 253 {
        // Dead arm: count > 253 + already here. The decoder still accepts
        // the [254, remainder] form.
        output.push(254);
        output.push((count - already - 254) as u8);
    } else {
        output.push(255);
        output.push((count >> 8) as u8);
        output.push((count & 0xFF) as u8);
    }
}

fn emit_record(
    output: &mut Vec<u8>,
    lits: &[u8],
    count_units: usize,
    offset_units: usize,
    multiple: usize,
) {
    let lit_units = lits.len() / multiple;
    let l0 = lit_units.min(7);
    let m0 = count_units.min(15);

    let mut header = ((l0 as u8) << 4) | m0 as u8;
    if offset_units >= 256 {
        header |= LONG_OFFSET;
    }
    output.push(header);

    if l0 == 7 {
        push_ext_count(output, lit_units, 7);
    }
    output.extend_from_slice(lits);
    if m0 == 15 {
        push_ext_count(output, count_units, 15);
    }

    if offset_units >= 256 {
        output.push((offset_units >> 8) as u8);
        output.push((offset_units & 0xFF) as u8);
    } else {
        output.push(offset_units as u8);
    }
}

fn read_ext_count(reader: &mut ByteReader<'_>, base: usize) -> Result<usize> {
    let v = reader.next_byte()? as usize;
    if v <= 253 {
        Ok(base + v)
    } else if v == 254 {
        Ok(base + 254 + reader.next_byte()? as usize)
    } else {
        let high = reader.next_byte()? as usize;
        let low = reader.next_byte()? as usize;
        Ok(high << 8 | low)
    }
}

impl super::PackFormat for FormatV2 {
    fn cost(&self, count: usize, offset: usize, multiple: usize) -> usize {
        let count = count / multiple;
        let offset = offset / multiple;

        // Header shared with the literal run, plus one offset byte
        let mut cost = 1;
        if count <= 253 + 15 {
            cost += 1;
        } else if count + 15 + 254 <= 253 {
            cost += 2;
        } else {
            cost += 3;
        }
        if offset >= 256 {
            cost += 1;
        }
        cost
    }

    fn encode(&self, tokens: &[Token], multiple: usize) -> Result<Vec<u8>> {
        crate::validate_tokens(tokens, multiple)?;

        let mut output = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let mut lits: &[u8] = &[];
            if let Some(Token::Literal(bytes)) = tokens.get(i) {
                lits = bytes;
                i += 1;
            }
            let mut count = 0usize;
            let mut offset = 0usize;
            if let Some(Token::Match {
                count: c,
                offset: o,
            }) = tokens.get(i)
            {
                count = *c;
                offset = *o;
                i += 1;
            }

            let offset_units = offset / multiple;
            if offset_units > MAX_OFFSET_UNITS {
                return Err(OxituneError::offset_too_far(
                    offset,
                    MAX_OFFSET_UNITS * multiple,
                ));
            }

            // Oversized literal runs become standalone records closed by a
            // zero match, a no-op for the decoder
            while lits.len() / multiple > MAX_UNITS {
                let (chunk, rest) = lits.split_at(MAX_UNITS * multiple);
                emit_record(&mut output, chunk, 0, 0, multiple);
                lits = rest;
            }

            let mut units = count / multiple;
            if units <= MAX_UNITS {
                emit_record(&mut output, lits, units, offset_units, multiple);
            } else {
                emit_record(&mut output, lits, MAX_UNITS, offset_units, multiple);
                units -= MAX_UNITS;
                while units > MAX_UNITS {
                    emit_record(&mut output, &[], MAX_UNITS, offset_units, multiple);
                    units -= MAX_UNITS;
                }
                emit_record(&mut output, &[], units, offset_units, multiple);
            }
        }
        Ok(output)
    }

    fn decode(&self, input: &[u8], multiple: usize) -> Result<Vec<u8>> {
        let mut reader = ByteReader::new(input);
        let mut output = Vec::new();

        while !reader.is_empty() {
            let cmd = reader.next_byte()?;
            let long_offset = cmd & LONG_OFFSET != 0;
            let mut lit_count = ((cmd >> 4) & 0x7) as usize;
            let mut match_count = (cmd & 0xF) as usize;

            if lit_count == 7 {
                lit_count = read_ext_count(&mut reader, 7)?;
            }
            lit_count *= multiple;
            let bytes = reader.take(lit_count)?;
            output.extend_from_slice(bytes);

            if match_count == 15 {
                match_count = read_ext_count(&mut reader, 15)?;
            }

            let mut offset = reader.next_byte()? as usize;
            if long_offset {
                offset = (offset << 8) + reader.next_byte()? as usize;
            }

            match_count *= multiple;
            offset *= multiple;
            if match_count > 0 {
                copy_back(&mut output, offset, match_count)?;
            }
        }
        Ok(output)
    }
}

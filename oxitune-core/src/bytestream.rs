//! Byte-level cursor over an in-memory buffer.
//!
//! Both pack formats are byte aligned, so decoding needs nothing more than
//! a bounds-checked forward cursor. `ByteReader` reports truncation as
//! [`OxituneError::UnexpectedEof`] instead of panicking on a short slice,
//! and tracks its position so corruption can be reported at an exact input
//! offset.
//!
//! # Example
//!
//! ```
//! use oxitune_core::bytestream::ByteReader;
//!
//! let mut reader = ByteReader::new(&[0x12, 0x34, 0x56]);
//! assert_eq!(reader.next_byte().unwrap(), 0x12);
//! assert_eq!(reader.read_u16_be().unwrap(), 0x3456);
//! assert!(reader.is_empty());
//! ```

use crate::error::{OxituneError, Result};

/// A bounds-checked forward cursor over a byte slice.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset from the start of the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Whether the cursor has consumed the whole input.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Read the next byte.
    pub fn next_byte(&mut self) -> Result<u8> {
        if self.pos >= self.input.len() {
            return Err(OxituneError::unexpected_eof(1));
        }
        let b = self.input[self.pos];
        self.pos += 1;
        Ok(b)
    }

    /// Read a big-endian 16-bit value.
    pub fn read_u16_be(&mut self) -> Result<u16> {
        if self.pos + 2 > self.input.len() {
            return Err(OxituneError::unexpected_eof(2 - self.remaining()));
        }
        let value = u16::from_be_bytes([self.input[self.pos], self.input[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    /// Read a big-endian 32-bit value.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        if self.pos + 4 > self.input.len() {
            return Err(OxituneError::unexpected_eof(4 - self.remaining()));
        }
        let value = u32::from_be_bytes([
            self.input[self.pos],
            self.input[self.pos + 1],
            self.input[self.pos + 2],
            self.input[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(value)
    }

    /// Borrow the next `count` bytes and advance past them.
    pub fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.pos + count > self.input.len() {
            return Err(OxituneError::unexpected_eof(count - self.remaining()));
        }
        let slice = &self.input[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }
}

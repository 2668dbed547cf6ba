//! YM3 register image parsing and reassembly.
//!
//! A YM3 file is the 4-byte magic `YM3!` followed by a register-major body:
//! fourteen equal-length streams, one per AY/YM register, each holding that
//! register's value for every frame of the capture. Frame `i` of register
//! `r` therefore lives at `4 + r * frames + i`.

use oxitune_core::error::{OxituneError, Result};

/// File magic of the YM3 format.
pub const YM3_MAGIC: &[u8; 4] = b"YM3!";

/// Registers captured per frame.
pub const YM_REGISTERS: usize = 14;

/// Conventional display names of the fourteen registers.
pub const REGISTER_NAMES: [&str; YM_REGISTERS] = [
    "Per Lo A",
    "Per Hi A",
    "Per Lo B",
    "Per Hi B",
    "Per Lo C",
    "Per Hi C",
    "Per Noise",
    "Mixer",
    "Vol A",
    "Vol B",
    "Vol C",
    "Per Lo Env",
    "Per Hi Env",
    "Env Shape",
];

/// A parsed YM3 register image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ym3File {
    frames: usize,
    body: Vec<u8>,
}

impl Ym3File {
    /// Parse a complete YM3 file image.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < YM3_MAGIC.len() {
            return Err(OxituneError::unexpected_eof(YM3_MAGIC.len() - bytes.len()));
        }
        let (magic, body) = bytes.split_at(YM3_MAGIC.len());
        if magic != YM3_MAGIC {
            return Err(OxituneError::invalid_magic(&YM3_MAGIC[..], magic));
        }
        Self::from_body(body.to_vec())
    }

    /// Build an image from a bare register-major body.
    pub fn from_body(body: Vec<u8>) -> Result<Self> {
        if body.len() % YM_REGISTERS != 0 {
            return Err(OxituneError::invalid_header(format!(
                "body length {} is not a multiple of {} registers",
                body.len(),
                YM_REGISTERS
            )));
        }
        let frames = body.len() / YM_REGISTERS;
        Ok(Ym3File { frames, body })
    }

    /// Build an image from fourteen equal-length register streams.
    pub fn from_registers(registers: &[Vec<u8>]) -> Result<Self> {
        if registers.len() != YM_REGISTERS {
            return Err(OxituneError::invalid_header(format!(
                "expected {} register streams, got {}",
                YM_REGISTERS,
                registers.len()
            )));
        }
        let frames = registers[0].len();
        let mut body = Vec::with_capacity(frames * YM_REGISTERS);
        for (r, stream) in registers.iter().enumerate() {
            if stream.len() != frames {
                return Err(OxituneError::invalid_header(format!(
                    "register {} holds {} frames, expected {}",
                    r,
                    stream.len(),
                    frames
                )));
            }
            body.extend_from_slice(stream);
        }
        Ok(Ym3File { frames, body })
    }

    /// Number of frames in the capture.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The register-major body without the magic.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// One register's values across all frames. `r` must be below
    /// [`YM_REGISTERS`].
    pub fn register(&self, r: usize) -> &[u8] {
        assert!(r < YM_REGISTERS);
        &self.body[r * self.frames..(r + 1) * self.frames]
    }

    /// Serialize back to a complete YM3 file image.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(YM3_MAGIC.len() + self.body.len());
        out.extend_from_slice(YM3_MAGIC);
        out.extend_from_slice(&self.body);
        out
    }
}

//! # oxitune Core
//!
//! Core components for the oxitune register-stream compressor.
//!
//! This crate provides the building blocks shared by the compression and
//! container layers:
//!
//! - [`bytestream`]: bounds-checked byte cursor used by the stream decoders
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! oxitune is a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI (oxitune-cli)                           │
//! │     pack / unpack / info / delta            │
//! ├─────────────────────────────────────────────┤
//! │ Container (oxitune-ym)                      │
//! │     YM3 parsing, packing modes, delta       │
//! ├─────────────────────────────────────────────┤
//! │ Codec (oxitune-lz)                          │
//! │     match finder, tokenizer, pack formats   │
//! ├─────────────────────────────────────────────┤
//! │ Core (this crate)                           │
//! │     ByteReader, error types                 │
//! └─────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bytestream;
pub mod error;

// Re-exports for convenience
pub use bytestream::ByteReader;
pub use error::{OxituneError, Result};

//! Binary codec for Tsumo fields.
//!
//! Payloads are bit streams: [`BitWriter`] packs fixed-width and varlen
//! integers MSB-first, and [`BitReader`] reads them back, failing hard on
//! truncation. Fields are stored with a [`PrefixTree`] built from their own
//! symbol frequencies, so mostly-empty fields cost about one bit per cell.
//! [`header`] stores parameters as deltas from known defaults, and
//! [`transport`] renders the bytes as URL-safe base64.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod field;
pub mod header;
pub mod prefix_tree;
pub mod transport;

pub use bitstream::{BitReader, BitWriter};
pub use error::CodecError;
pub use header::ParameterSpec;
pub use prefix_tree::{Code, Encoding, PrefixTree};

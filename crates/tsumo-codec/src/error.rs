//! Error types for the binary codec.

use std::error::Error;
use std::fmt;

/// Errors from bit stream I/O, prefix trees and field payloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A fixed-width read or write asked for more than 64 bits, or a varlen
    /// partition was zero or wider than 64 bits.
    InvalidBitCount {
        /// The requested bit count.
        count: u32,
    },
    /// The source ran out of bits.
    UnexpectedEof {
        /// Bits the read needed.
        needed: u32,
        /// Bits left in the source.
        remaining: usize,
    },
    /// A varlen value does not fit the declared maximum width.
    ValueTooWide {
        /// The value being written.
        value: u64,
        /// The declared maximum width in bits.
        max_bit_count: u32,
    },
    /// A varlen value read from the stream does not fit in 64 bits.
    VarlenOverflow {
        /// Partition size of the failing read.
        partition_bits: u32,
    },
    /// A prefix tree was requested for an empty frequency table.
    EmptyAlphabet,
    /// A serialized prefix tree could not be rebuilt.
    MalformedTree {
        /// What went wrong.
        detail: String,
    },
    /// A serialized prefix tree names the same symbol on two leaves.
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },
    /// A symbol has no code in the tree, or decodes to no known cell kind.
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
    },
    /// A symbol does not fit the 8-bit leaf encoding.
    NonAsciiSymbol {
        /// The offending symbol.
        symbol: char,
    },
    /// A header was written or read with the wrong number of values.
    ParameterCountMismatch {
        /// Number of parameter specs.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
    /// The transport string is not valid URL-safe base64.
    InvalidTransport(base64ct::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitCount { count } => write!(f, "invalid bit count {count}"),
            Self::UnexpectedEof { needed, remaining } => write!(
                f,
                "unexpected end of stream: needed {needed} bits, {remaining} remaining"
            ),
            Self::ValueTooWide {
                value,
                max_bit_count,
            } => write!(f, "value {value} does not fit in {max_bit_count} bits"),
            Self::VarlenOverflow { partition_bits } => write!(
                f,
                "variable-length value overflows 64 bits (partition {partition_bits})"
            ),
            Self::EmptyAlphabet => write!(f, "cannot build a prefix tree without symbols"),
            Self::MalformedTree { detail } => write!(f, "malformed prefix tree: {detail}"),
            Self::DuplicateSymbol { symbol } => {
                write!(f, "prefix tree holds symbol {symbol:?} more than once")
            }
            Self::UnknownSymbol { symbol } => write!(f, "unknown symbol {symbol:?}"),
            Self::NonAsciiSymbol { symbol } => {
                write!(f, "symbol {symbol:?} is not a single-byte ASCII character")
            }
            Self::ParameterCountMismatch { expected, found } => write!(
                f,
                "expected {expected} header parameters, found {found}"
            ),
            Self::InvalidTransport(e) => write!(f, "invalid transport string: {e}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTransport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base64ct::Error> for CodecError {
    fn from(e: base64ct::Error) -> Self {
        Self::InvalidTransport(e)
    }
}

//! Error types for rules and game payloads.

use std::error::Error;
use std::fmt;

use tsumo_codec::CodecError;

/// A [`Rule`](crate::Rule) that cannot drive a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The initial nuisance rate is zero, so points cannot convert.
    ZeroNuisanceRate,
    /// The minimum clear connection is zero, so every cell would clear.
    ZeroMinClearConnection,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroNuisanceRate => write!(f, "initial nuisance rate must be at least 1"),
            Self::ZeroMinClearConnection => {
                write!(f, "minimum clear connection must be at least 1")
            }
        }
    }
}

impl Error for RuleError {}

/// Errors from encoding or decoding a game payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PayloadError {
    /// The bit stream or transport layer failed.
    Codec(CodecError),
    /// The decoded rule failed validation.
    Rule(RuleError),
    /// The mode selector names no known game mode.
    UnknownMode {
        /// The decoded selector.
        mode: u64,
    },
    /// A parameter that must have a value was null.
    NullParameter {
        /// Parameter name.
        name: &'static str,
    },
    /// A parameter does not fit its allowed range.
    ParameterOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The value found.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(e) => write!(f, "codec error: {e}"),
            Self::Rule(e) => write!(f, "invalid rule: {e}"),
            Self::UnknownMode { mode } => write!(f, "unknown game mode {mode}"),
            Self::NullParameter { name } => write!(f, "parameter {name} must not be null"),
            Self::ParameterOutOfRange { name, value, max } => {
                write!(f, "parameter {name} is {value}, maximum is {max}")
            }
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for PayloadError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

impl From<RuleError> for PayloadError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

//! Error types shared across the Tsumo workspace.

use crate::dimension::Dimension;
use std::error::Error;
use std::fmt;

/// Errors from operations that relate two fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The two fields do not share a dimension and cannot be compared.
    IncomparableDimensions {
        /// Dimension of the left-hand field.
        left: Dimension,
        /// Dimension of the right-hand field.
        right: Dimension,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncomparableDimensions { left, right } => {
                write!(f, "fields are not comparable: {left:?} vs {right:?}")
            }
        }
    }
}

impl Error for FieldError {}

//! Core types for the Tsumo falling-block puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value types used throughout the Tsumo workspace:
//! the cell kind set ([`FieldObject`]), grid [`Dimension`]s, ephemeral
//! [`Position`] coordinates, neighbour [`ConnectionMask`]s, and errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dimension;
pub mod error;
pub mod object;
pub mod position;

pub use dimension::Dimension;
pub use error::FieldError;
pub use object::FieldObject;
pub use position::{ConnectionMask, Position};

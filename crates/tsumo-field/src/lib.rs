//! Field storage and simulation algorithms for Tsumo.
//!
//! A [`Field`] is a sparse, column-major grid of [`FieldObject`]s. It is
//! mutated only through cell setters or by applying [`Diff`]s. The
//! [`algorithm`] module computes diffs without mutating its input:
//!
//! - [`find_connections`](algorithm::find_connections): same-kind regions
//! - [`clearing_diff`](algorithm::clearing_diff): composed clear transforms
//! - [`gravitational_diff`](algorithm::gravitational_diff): falling exchanges
//! - [`diff`](algorithm::diff): structural difference between two fields
//!
//! The [`ascii`] module reads and writes the wall-bordered text format.
//!
//! [`FieldObject`]: tsumo_core::FieldObject

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod ascii;
pub mod diff;
pub mod error;
pub mod field;

pub use algorithm::{Connections, Group, Visibility};
pub use diff::{Diff, DiffBatch};
pub use error::AsciiError;
pub use field::Field;

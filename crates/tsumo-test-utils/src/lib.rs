//! Test fixtures and seeded field generators for Tsumo development.
//!
//! - [`fixtures`]: small named scenarios written as ASCII art.
//! - [`random`]: deterministic random fields from a `u64` seed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod random;

pub use fixtures::*;
pub use random::{random_field, random_settled_field};

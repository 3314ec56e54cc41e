//! Tsu rules and game flow on top of the Tsumo field engine.
//!
//! - [`Rule`]: the five Tsu parameters with defaults and validation, plus
//!   the nuisance rate schedule.
//! - [`score`]: chain, color and group bonuses and transform points.
//! - [`TsuGame`]: a field under a rule, resolved link by link into a
//!   [`ChainReport`].
//! - [`payload`]: the compact shareable encoding of a game.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod payload;
pub mod rule;
pub mod score;

pub use error::{PayloadError, RuleError};
pub use game::{ChainReport, ChainStep, TsuGame};
pub use payload::GameMode;
pub use rule::{NuisanceRates, Rule};
pub use score::Score;

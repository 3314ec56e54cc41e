//! Tsumo: a falling-block puzzle engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tsumo sub-crates. For most users, adding `tsumo` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tsumo::prelude::*;
//!
//! let field = from_ascii_art(
//!     "\
//! ||   R   ||
//! ||   B   ||
//! ||   B   ||
//! || R B   ||
//! || R B R ||
//! ++=======++",
//! )
//! .unwrap();
//!
//! let mut game = TsuGame::with_field(Rule::default(), field).unwrap();
//! let shared = tsumo::game::payload::encode(&game).unwrap();
//!
//! let report = game.resolve();
//! assert_eq!(report.chain_count(), 2);
//! assert!(game.field().is_empty());
//!
//! // The shared string still holds the field as it was before resolving.
//! let restored = tsumo::game::payload::decode(&shared).unwrap();
//! assert_eq!(restored.field().get(Position::new(4, 1)), Some(FieldObject::Red));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tsumo-core` | Cell kinds, dimensions, positions |
//! | [`field`] | `tsumo-field` | Field storage, diffs, algorithms, ASCII art |
//! | [`codec`] | `tsumo-codec` | Bit streams, prefix trees, headers, transport |
//! | [`game`] | `tsumo-game` | Tsu rules, scoring, chains, payloads |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell kinds, dimensions and positions (`tsumo-core`).
pub use tsumo_core as types;

/// Field storage and algorithms (`tsumo-field`).
///
/// The pure diff producers live in [`field::algorithm`]; the text format
/// in [`field::ascii`].
pub use tsumo_field as field;

/// Bit-level payload codec (`tsumo-codec`).
pub use tsumo_codec as codec;

/// Tsu rules and game flow (`tsumo-game`).
///
/// [`game::TsuGame`] resolves chains; [`game::payload`] shares games as
/// short strings.
pub use tsumo_game as game;

/// Common imports for typical Tsumo usage.
///
/// ```rust
/// use tsumo::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tsumo_core::{ConnectionMask, Dimension, FieldError, FieldObject, Position};

    // Field
    pub use tsumo_field::algorithm::{
        clearing_diff, diff, find_connections, flatten_connections, gravitate,
        gravitational_diff,
    };
    pub use tsumo_field::ascii::{from_ascii_art, to_ascii_art};
    pub use tsumo_field::{AsciiError, Connections, Diff, DiffBatch, Field, Visibility};

    // Codec
    pub use tsumo_codec::{BitReader, BitWriter, CodecError, PrefixTree};

    // Game
    pub use tsumo_game::{ChainReport, PayloadError, Rule, RuleError, Score, TsuGame};
}

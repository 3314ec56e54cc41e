//! The cell kind set and its per-kind transition behaviour.

use crate::position::Position;
use std::fmt;

/// A kind of cell that can occupy a slot on a field.
///
/// Every kind carries a unique one-character ASCII symbol (used by the
/// ASCII art format and as the codec's alphabet), a gravity-immunity flag,
/// and two pure transitions:
///
/// - [`cleared`](Self::cleared): what the kind becomes when it is itself
///   part of a clearing set. Returning `self` means "not clearable".
/// - [`adjacent_cleared`](Self::adjacent_cleared): what the kind becomes
///   when a 4-neighbour is cleared. Returning `self` means "unaffected".
///
/// [`FieldObject::Empty`] is mandatory and gravity-immune; unaddressed
/// cells on a field are implicitly empty.
///
/// # Examples
///
/// ```
/// use tsumo_core::{FieldObject, Position};
///
/// let at = Position::new(0, 0);
/// assert_eq!(FieldObject::Red.cleared(at), FieldObject::Empty);
/// assert_eq!(FieldObject::HardNuisance.adjacent_cleared(at), FieldObject::Nuisance);
/// assert_eq!(FieldObject::from_symbol('G'), Some(FieldObject::Green));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FieldObject {
    /// No object. Gravity-immune, never transforms.
    #[default]
    Empty,
    /// Red colored object, cleared to empty.
    Red,
    /// Yellow colored object, cleared to empty.
    Yellow,
    /// Blue colored object, cleared to empty.
    Blue,
    /// Green colored object, cleared to empty.
    Green,
    /// Purple colored object, cleared to empty.
    Purple,
    /// Fixed wall block: gravity-immune and never cleared.
    Block,
    /// Inert object that falls but is never cleared.
    Iron,
    /// Nuisance: removed when a neighbour is cleared.
    Nuisance,
    /// Hard nuisance: degrades to [`Nuisance`](Self::Nuisance) when a
    /// neighbour is cleared.
    HardNuisance,
}

impl FieldObject {
    /// Every registered kind, in declaration order.
    pub const ALL: [FieldObject; 10] = [
        Self::Empty,
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Block,
        Self::Iron,
        Self::Nuisance,
        Self::HardNuisance,
    ];

    /// The colored kinds that take part in connection clearing.
    pub const COLORS: [FieldObject; 5] = [
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Purple,
    ];

    /// The one-character ASCII symbol for this kind. Unique per kind.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Purple => 'P',
            Self::Block => '=',
            Self::Iron => '-',
            Self::Nuisance => 'o',
            Self::HardNuisance => 'O',
        }
    }

    /// Look up a kind by its symbol. Returns `None` for unregistered symbols.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|obj| obj.symbol() == symbol)
    }

    /// Whether this kind stays in place when gravity is applied.
    pub const fn is_gravity_immune(self) -> bool {
        matches!(self, Self::Empty | Self::Block)
    }

    /// Whether this kind is one of [`COLORS`](Self::COLORS).
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            Self::Red | Self::Yellow | Self::Blue | Self::Green | Self::Purple
        )
    }

    /// What this kind becomes when it is part of a clearing set.
    pub fn cleared(self, _at: Position) -> FieldObject {
        match self {
            Self::Red | Self::Yellow | Self::Blue | Self::Green | Self::Purple => Self::Empty,
            other => other,
        }
    }

    /// What this kind becomes when one of its 4-neighbours is cleared.
    ///
    /// Clearable kinds should leave this as the identity: when a kind is
    /// both cleared and adjacent to other cleared cells, the final kind
    /// depends on clearing order.
    pub fn adjacent_cleared(self, _at: Position) -> FieldObject {
        match self {
            Self::Nuisance => Self::Empty,
            Self::HardNuisance => Self::Nuisance,
            other => other,
        }
    }
}

impl fmt::Display for FieldObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

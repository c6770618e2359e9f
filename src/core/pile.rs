//! Piles and pile references.
//!
//! A pile is an ordered stack of cards: index 0 is the bottom, the last
//! index is the top. Piles are `im::Vector`s so a full `GameState` clones
//! in O(1), which is what makes snapshot-per-move history affordable.
//!
//! `PileRef` is the discriminated handle the UI layer uses to name a pile.
//! The engine never sees coordinates or layout rectangles; drop-target
//! resolution happens outside and arrives here as a `PileRef`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// An ordered stack of cards, bottom first.
pub type Pile = im::Vector<Card>;

/// A contiguous run of dragged cards, bottom-most first.
///
/// Runs are at most 13 cards (a full King-to-Ace build), so they live
/// inline without heap allocation.
pub type CardRun = SmallVec<[Card; 13]>;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Reference to one of the game's piles.
///
/// Indices are 0-based: `Foundation(0..4)`, `Tableau(0..7)`. Out-of-range
/// indices are a caller bug; the rules engine treats them as illegal rather
/// than panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize),
}

impl PileRef {
    /// Is this a foundation pile?
    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PileRef::Foundation(_))
    }

    /// Is this a tableau pile?
    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PileRef::Tableau(_))
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Stock => write!(f, "Stock"),
            PileRef::Waste => write!(f, "Waste"),
            PileRef::Foundation(i) => write!(f, "Foundation({i})"),
            PileRef::Tableau(i) => write!(f, "Tableau({i})"),
        }
    }
}

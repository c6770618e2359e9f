//! Game state: the tuple of all piles, and the deal.
//!
//! ## GameState
//!
//! A `GameState` is a value: stock, waste, four foundations, seven
//! tableaux. It is created once by [`GameState::deal`] and thereafter only
//! by pure transformations in [`crate::rules`], each of which returns a
//! brand-new state. No state is mutated in place once recorded into
//! history; piles are `im::Vector`s so the clone behind each transformation
//! is O(1).
//!
//! ## Invariants
//!
//! Every state the engine produces satisfies:
//!
//! 1. **Conservation**: the 52 `(Suit, Rank)` identities each appear
//!    exactly once across all piles.
//! 2. **Foundations**: same suit, strictly ascending from Ace.
//! 3. **Tableaux**: face-down prefix, face-up suffix; the suffix descends
//!    strictly in rank with alternating color.
//! 4. **Stock/waste facing**: stock cards are face-down, waste cards
//!    face-up.
//!
//! The `*_valid` methods verify these; [`GameState::check_invariants`]
//! asserts them in debug builds after every transformation. A violation is
//! a programming defect, never a user-reachable condition.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{full_deck, Card, Rank, Suit};
use super::pile::{Pile, PileRef, FOUNDATION_COUNT, TABLEAU_COUNT};
use super::rng::GameRng;

/// Complete state of a Klondike game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down draw pile. The tail is the top.
    pub stock: Pile,

    /// Face-up pile receiving drawn cards. The tail is the top.
    pub waste: Pile,

    /// Destination piles, built Ace → King of a single suit. A foundation
    /// is not suit-locked until its first card lands.
    pub foundations: [Pile; FOUNDATION_COUNT],

    /// Working piles, built down with alternating color.
    pub tableau: [Pile; TABLEAU_COUNT],
}

impl GameState {
    /// An empty board, used as the starting point for the deal.
    fn empty() -> Self {
        Self {
            stock: Pile::new(),
            waste: Pile::new(),
            foundations: std::array::from_fn(|_| Pile::new()),
            tableau: std::array::from_fn(|_| Pile::new()),
        }
    }

    /// Deal a fresh game from a shuffled deck.
    ///
    /// Tableau pile `i` receives `i + 1` cards from the front of the deck,
    /// all face-down except the last, giving piles of size 1..7 with one
    /// face-up top card each. The remaining 24 cards become the stock in
    /// deck order, face-down. Waste and foundations start empty.
    ///
    /// The RNG is the only source of randomness: the same seed always
    /// produces the same deal.
    ///
    /// ```
    /// use klondike_core::{GameRng, GameState};
    ///
    /// let mut rng = GameRng::new(42);
    /// let state = GameState::deal(&mut rng);
    ///
    /// assert_eq!(state.stock.len(), 24);
    /// assert!(state.waste.is_empty());
    /// assert_eq!(state.tableau[6].len(), 7);
    /// ```
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut deck = full_deck();
        rng.shuffle(&mut deck);

        let mut state = Self::empty();
        let mut deck = deck.into_iter();

        for (i, pile) in state.tableau.iter_mut().enumerate() {
            for (j, card) in deck.by_ref().take(i + 1).enumerate() {
                pile.push_back(if j == i { card.turned_up() } else { card });
            }
        }

        for card in deck {
            state.stock.push_back(card);
        }

        state.check_invariants();
        state
    }

    /// Look up a pile by reference.
    ///
    /// Out-of-range foundation/tableau indices are a caller bug and panic;
    /// the rules engine bounds-checks before calling.
    #[must_use]
    pub fn pile(&self, pile: PileRef) -> &Pile {
        match pile {
            PileRef::Stock => &self.stock,
            PileRef::Waste => &self.waste,
            PileRef::Foundation(i) => &self.foundations[i],
            PileRef::Tableau(i) => &self.tableau[i],
        }
    }

    /// All eleven piles, stock first.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.tableau.iter())
    }

    /// Total cards across all piles. Always 52 for reachable states.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// The game is won when all four foundations are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|f| f.len() == Rank::ALL.len())
    }

    // === Invariant checks ===

    /// Every one of the 52 card identities appears exactly once.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let mut seen: FxHashSet<(Suit, Rank)> = FxHashSet::default();
        let mut count = 0usize;
        for pile in self.piles() {
            for card in pile {
                if !seen.insert(card.id()) {
                    return false;
                }
                count += 1;
            }
        }
        count == 52
    }

    /// Each non-empty foundation is suit-homogeneous and rank-ascending
    /// from Ace with no gaps.
    #[must_use]
    pub fn foundations_valid(&self) -> bool {
        self.foundations.iter().all(|foundation| {
            let Some(bottom) = foundation.front() else {
                return true;
            };
            bottom.rank == Rank::Ace
                && foundation
                    .iter()
                    .enumerate()
                    .all(|(i, c)| c.suit == bottom.suit && c.rank.value() as usize == i)
        })
    }

    /// Each tableau has a face-down prefix and a face-up suffix that is
    /// strictly descending with alternating color.
    #[must_use]
    pub fn tableau_valid(&self) -> bool {
        self.tableau.iter().all(|pile| {
            let first_up = pile
                .iter()
                .position(|c| c.face_up)
                .unwrap_or_else(|| pile.len());
            if !pile.iter().skip(first_up).all(|c| c.face_up) {
                return false;
            }
            pile.iter()
                .skip(first_up)
                .zip(pile.iter().skip(first_up + 1))
                .all(|(below, above)| {
                    below.is_red() != above.is_red() && above.rank.next() == Some(below.rank)
                })
        })
    }

    /// Stock cards are face-down, waste cards face-up.
    #[must_use]
    pub fn stock_waste_valid(&self) -> bool {
        self.stock.iter().all(|c| !c.face_up) && self.waste.iter().all(|c| c.face_up)
    }

    /// Assert all invariants in debug builds.
    ///
    /// Called by every state-producing operation before it returns.
    pub(crate) fn check_invariants(&self) {
        debug_assert!(self.is_conserved(), "card conservation violated");
        debug_assert!(self.foundations_valid(), "foundation invariant violated");
        debug_assert!(self.tableau_valid(), "tableau invariant violated");
        debug_assert!(self.stock_waste_valid(), "stock/waste facing violated");
    }
}

//! Move legality and drag selection.
//!
//! Both functions are pure and total: they never panic, and any malformed
//! input (empty run, out-of-range pile index, pile kind that cannot be a
//! target) simply reads as illegal. Validation trusts that the dragged run
//! was extracted by [`draggable_run`]; it does not re-check that the cards
//! are present in the claimed source pile — that mechanical concern belongs
//! to [`crate::rules::apply_move`].

use smallvec::smallvec;

use crate::core::{Card, CardRun, GameState, PileRef, Rank};

/// Decide whether dropping `dragged` onto `target` is legal.
///
/// Rules by target kind:
/// - **Foundation**: single cards only. An empty foundation takes an Ace;
///   otherwise suit must match the top card and rank must be exactly one
///   higher.
/// - **Tableau**: an empty tableau takes a King-led run; otherwise the
///   first dragged card must be the opposite color of the top card and
///   exactly one rank lower.
/// - **Stock / Waste**: never legal drop targets.
///
/// ```
/// use klondike_core::{is_valid_move, Card, GameRng, GameState, PileRef, Rank, Suit};
///
/// let state = GameState::deal(&mut GameRng::new(42));
/// let ace = Card::new(Suit::Spades, Rank::Ace).turned_up();
///
/// // An ace can always start an empty foundation
/// assert!(is_valid_move(&[ace], PileRef::Foundation(0), &state));
/// // Nothing may ever be dropped on the stock
/// assert!(!is_valid_move(&[ace], PileRef::Stock, &state));
/// ```
#[must_use]
pub fn is_valid_move(dragged: &[Card], target: PileRef, state: &GameState) -> bool {
    let Some(first) = dragged.first() else {
        return false;
    };

    match target {
        PileRef::Foundation(i) => {
            if dragged.len() > 1 {
                return false;
            }
            let Some(foundation) = state.foundations.get(i) else {
                return false;
            };
            match foundation.last() {
                None => first.rank == Rank::Ace,
                Some(top) => first.suit == top.suit && top.rank.next() == Some(first.rank),
            }
        }
        PileRef::Tableau(i) => {
            let Some(pile) = state.tableau.get(i) else {
                return false;
            };
            match pile.last() {
                None => first.rank == Rank::King,
                Some(top) => first.is_red() != top.is_red() && first.rank.next() == Some(top.rank),
            }
        }
        PileRef::Stock | PileRef::Waste => false,
    }
}

/// The run of cards a touch on `card` in `source` picks up.
///
/// - **Tableau**: the touched card and everything above it, provided the
///   touched card is face-up. Touching a face-down card yields an empty
///   run and the caller aborts the gesture.
/// - **Waste**: the top card only; touching anything else yields nothing.
/// - **Stock / Foundation**: no drag ever originates here.
///
/// Matching is by card identity, so a stale face-up flag on the touched
/// card does not matter; the pile's own entry is authoritative.
#[must_use]
pub fn draggable_run(card: Card, source: PileRef, state: &GameState) -> CardRun {
    match source {
        PileRef::Tableau(i) => {
            let Some(pile) = state.tableau.get(i) else {
                return CardRun::new();
            };
            match pile.iter().position(|c| c.id() == card.id()) {
                Some(start) if pile[start].face_up => {
                    pile.iter().skip(start).copied().collect()
                }
                _ => CardRun::new(),
            }
        }
        PileRef::Waste => match state.waste.last() {
            Some(top) if top.id() == card.id() => smallvec![*top],
            _ => CardRun::new(),
        },
        PileRef::Stock | PileRef::Foundation(_) => CardRun::new(),
    }
}

//! Move execution.
//!
//! Validation and execution are separate passes: [`apply_move`] assumes the
//! caller already ran [`crate::rules::is_valid_move`] and only performs the
//! transfer mechanically. It never re-validates legality.

use smallvec::SmallVec;

use crate::core::{Card, CardRun, GameState, PileRef, Rank, Suit};

/// Apply a validated move, producing the next state.
///
/// The input state is untouched; the transfer happens on an independent
/// clone so previously recorded history snapshots stay valid.
///
/// Mechanics:
/// 1. Source must be Waste or a Tableau, target a Foundation or Tableau.
///    Anything else returns the state unchanged — a defensive fallback,
///    not a user-reachable path.
/// 2. The cards to move are matched by `(Suit, Rank)` identity against the
///    source pile, in pile order. Matching by identity is what lets the
///    operation work on a fresh copy rather than the caller's card values.
/// 3. The matched run is removed from the source and appended to the
///    target, order preserved.
/// 4. If the source is a tableau left non-empty with a face-down top card,
///    that card flips face-up. A waste source never triggers a flip.
///
/// Malformed calls (dragged cards absent from the claimed source) degrade
/// to a no-op on the affected pile rather than panicking; validated
/// callers never hit that path.
#[must_use]
pub fn apply_move(
    state: &GameState,
    dragged: &[Card],
    source: PileRef,
    target: PileRef,
) -> GameState {
    let mut next = state.clone();

    // Both references must resolve before anything is removed, so the
    // defensive fallback cannot strand cards mid-transfer.
    let source_ok = matches!(source, PileRef::Waste)
        || matches!(source, PileRef::Tableau(i) if i < next.tableau.len());
    let target_ok = matches!(target, PileRef::Foundation(i) if i < next.foundations.len())
        || matches!(target, PileRef::Tableau(i) if i < next.tableau.len());
    if !source_ok || !target_ok {
        return next;
    }

    let ids: SmallVec<[(Suit, Rank); 13]> = dragged.iter().map(|c| c.id()).collect();

    let moving: CardRun = {
        let source_pile = match source {
            PileRef::Waste => &mut next.waste,
            PileRef::Tableau(i) => &mut next.tableau[i],
            _ => unreachable!("source checked above"),
        };
        let moving = source_pile
            .iter()
            .filter(|c| ids.contains(&c.id()))
            .copied()
            .collect();
        source_pile.retain(|c| !ids.contains(&c.id()));
        moving
    };

    {
        let target_pile = match target {
            PileRef::Foundation(i) => &mut next.foundations[i],
            PileRef::Tableau(i) => &mut next.tableau[i],
            _ => unreachable!("target checked above"),
        };
        for card in &moving {
            target_pile.push_back(*card);
        }
    }

    // Expose the card underneath a tableau source
    if !moving.is_empty() {
        if let PileRef::Tableau(i) = source {
            let pile = &mut next.tableau[i];
            if let Some(top) = pile.last().copied() {
                if !top.face_up {
                    let top_index = pile.len() - 1;
                    pile.set(top_index, top.turned_up());
                }
            }
        }
    }

    next.check_invariants();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Pile};

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank).turned_up()
    }

    fn pile(cards: Vec<Card>) -> Pile {
        cards.into_iter().collect()
    }

    /// A hand-built board that keeps all 52 cards accounted for: the deal
    /// is rearranged so specific piles have known contents, and every move
    /// the tests apply through it is legal under the rules.
    ///
    /// Layout: tableau 0 = 10♣(down) 8♠ 7♥, tableau 1 = 9♥,
    /// tableau 2 = 10♠, tableau 3 = 8♣, waste = 6♦, foundation 0 = A♥ 2♥,
    /// everything else face-down in the stock.
    fn fixture() -> GameState {
        let mut state = GameState::deal(&mut GameRng::new(42));

        // Collect every card, then lay out the piles we want on top of the
        // stock so conservation still holds.
        let mut cards: Vec<Card> = state.piles().flatten().map(|c| c.turned_down()).collect();

        let take = |cards: &mut Vec<Card>, suit: Suit, rank: Rank| -> Card {
            let i = cards
                .iter()
                .position(|c| c.id() == (suit, rank))
                .expect("card present");
            cards.remove(i)
        };

        let t0 = vec![
            take(&mut cards, Suit::Clubs, Rank::Ten), // face-down base
            take(&mut cards, Suit::Spades, Rank::Eight).turned_up(),
            take(&mut cards, Suit::Hearts, Rank::Seven).turned_up(),
        ];
        let t1 = vec![take(&mut cards, Suit::Hearts, Rank::Nine).turned_up()];
        let t2 = vec![take(&mut cards, Suit::Spades, Rank::Ten).turned_up()];
        let t3 = vec![take(&mut cards, Suit::Clubs, Rank::Eight).turned_up()];

        let waste = vec![take(&mut cards, Suit::Diamonds, Rank::Six).turned_up()];

        let f0 = vec![
            take(&mut cards, Suit::Hearts, Rank::Ace).turned_up(),
            take(&mut cards, Suit::Hearts, Rank::Two).turned_up(),
        ];

        state.tableau = std::array::from_fn(|_| Pile::new());
        state.foundations = std::array::from_fn(|_| Pile::new());
        state.tableau[0] = pile(t0);
        state.tableau[1] = pile(t1);
        state.tableau[2] = pile(t2);
        state.tableau[3] = pile(t3);
        state.waste = pile(waste);
        state.foundations[0] = pile(f0);
        state.stock = cards.into_iter().collect();

        assert!(state.is_conserved());
        assert!(state.tableau_valid());
        state
    }

    #[test]
    fn test_run_transfer_flips_exposed_card() {
        let state = fixture();
        // 8♠ 7♥ from tableau 0 onto the red 9♥
        let run = [up(Suit::Spades, Rank::Eight), up(Suit::Hearts, Rank::Seven)];
        let next = apply_move(&state, &run, PileRef::Tableau(0), PileRef::Tableau(1));

        // Run arrived in order
        assert_eq!(next.tableau[1].len(), 3);
        assert_eq!(next.tableau[1][1].id(), (Suit::Spades, Rank::Eight));
        assert_eq!(next.tableau[1][2].id(), (Suit::Hearts, Rank::Seven));

        // Exposed base card flipped face-up
        assert_eq!(next.tableau[0].len(), 1);
        let exposed = next.tableau[0].last().unwrap();
        assert_eq!(exposed.id(), (Suit::Clubs, Rank::Ten));
        assert!(exposed.face_up);

        // Input state untouched
        assert_eq!(state.tableau[0].len(), 3);
        assert!(!state.tableau[0][0].face_up);
    }

    #[test]
    fn test_waste_to_foundation() {
        let mut state = fixture();
        // Put the 3♥ on the waste so it can go to foundation 0 (A♥ 2♥)
        let three = state
            .stock
            .iter()
            .position(|c| c.id() == (Suit::Hearts, Rank::Three))
            .unwrap();
        let card = state.stock.remove(three);
        state.waste.push_back(card.turned_up());

        let next = apply_move(
            &state,
            &[up(Suit::Hearts, Rank::Three)],
            PileRef::Waste,
            PileRef::Foundation(0),
        );

        assert_eq!(next.foundations[0].len(), 3);
        assert_eq!(
            next.foundations[0].last().unwrap().id(),
            (Suit::Hearts, Rank::Three)
        );
        // Waste shrank by one, and no flip happened there
        assert_eq!(next.waste.len(), state.waste.len() - 1);
    }

    #[test]
    fn test_no_flip_when_exposed_card_already_face_up() {
        let state = fixture();
        // Tableau 0 is 10♣(down) 8♠(up) 7♥(up): move only the 7♥ onto the 8♣
        let next = apply_move(
            &state,
            &[up(Suit::Hearts, Rank::Seven)],
            PileRef::Tableau(0),
            PileRef::Tableau(3),
        );

        // 8♠ was already face-up; it stays as-is and the base stays down
        assert_eq!(next.tableau[0].len(), 2);
        assert!(next.tableau[0][1].face_up);
        assert!(!next.tableau[0][0].face_up);
        assert_eq!(next.tableau[3].len(), 2);
    }

    #[test]
    fn test_emptied_tableau_source_has_nothing_to_flip() {
        let state = fixture();
        // Lone 9♥ from tableau 1 onto the black 10♠
        let next = apply_move(
            &state,
            &[up(Suit::Hearts, Rank::Nine)],
            PileRef::Tableau(1),
            PileRef::Tableau(2),
        );

        assert!(next.tableau[1].is_empty());
        assert_eq!(next.tableau[2].len(), 2);
    }

    #[test]
    fn test_invalid_source_kind_is_a_no_op() {
        let state = fixture();
        let run = [up(Suit::Hearts, Rank::Two)];

        let from_stock = apply_move(&state, &run, PileRef::Stock, PileRef::Tableau(0));
        assert_eq!(from_stock, state);

        let from_foundation =
            apply_move(&state, &run, PileRef::Foundation(0), PileRef::Tableau(0));
        assert_eq!(from_foundation, state);
    }

    #[test]
    fn test_invalid_target_kind_is_a_no_op() {
        let state = fixture();
        let run = [up(Suit::Hearts, Rank::Seven)];

        assert_eq!(apply_move(&state, &run, PileRef::Tableau(0), PileRef::Stock), state);
        assert_eq!(apply_move(&state, &run, PileRef::Tableau(0), PileRef::Waste), state);
        assert_eq!(
            apply_move(&state, &run, PileRef::Tableau(0), PileRef::Foundation(9)),
            state
        );
    }

    #[test]
    fn test_mismatched_dragged_cards_degrade_to_no_op() {
        let state = fixture();
        // The K♦ is buried in the stock, not in tableau 0; nothing moves
        // and in particular nothing flips.
        let next = apply_move(
            &state,
            &[up(Suit::Diamonds, Rank::King)],
            PileRef::Tableau(0),
            PileRef::Tableau(1),
        );

        assert_eq!(next.tableau[0], state.tableau[0]);
        assert_eq!(next.tableau[1], state.tableau[1]);
    }

    #[test]
    fn test_conservation_across_moves() {
        let state = fixture();
        let next = apply_move(
            &state,
            &[up(Suit::Spades, Rank::Eight), up(Suit::Hearts, Rank::Seven)],
            PileRef::Tableau(0),
            PileRef::Tableau(1),
        );

        assert!(next.is_conserved());
        assert_eq!(next.card_count(), 52);
    }
}

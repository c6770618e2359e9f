//! Stock drawing and waste recycling.
//!
//! Drawing pops cards one at a time off the stock tail onto the waste tail,
//! so the top of the waste after a draw is the card that sat `draw_count`
//! deep in the stock. That pop order is what makes recycling a round trip:
//! recycle reverses the waste into the stock, and re-drawing it card by
//! card rebuilds the waste in its exact pre-recycle order.

use crate::core::GameState;

/// Draw up to `draw_count` cards from the stock onto the waste.
///
/// Each drawn card flips face-up as it lands on the waste. If the stock is
/// empty the draw recycles the waste instead; if both piles are empty the
/// state comes back unchanged.
///
/// ```
/// use klondike_core::{draw_from_stock, GameRng, GameState};
///
/// let state = GameState::deal(&mut GameRng::new(42));
/// let next = draw_from_stock(&state, 3);
///
/// assert_eq!(next.stock.len(), 21);
/// assert_eq!(next.waste.len(), 3);
/// assert!(next.waste.iter().all(|c| c.face_up));
/// ```
#[must_use]
pub fn draw_from_stock(state: &GameState, draw_count: usize) -> GameState {
    if state.stock.is_empty() {
        return recycle_waste(state);
    }

    let mut next = state.clone();
    let n = draw_count.min(next.stock.len());
    for _ in 0..n {
        if let Some(card) = next.stock.pop_back() {
            next.waste.push_back(card.turned_up());
        }
    }

    next.check_invariants();
    next
}

/// Move the entire waste back into the stock, face-down, order reversed.
///
/// The waste's bottom card becomes the stock's new top, restoring the
/// pre-draw stock order. Recycling an empty waste is a no-op.
#[must_use]
pub fn recycle_waste(state: &GameState) -> GameState {
    let mut next = state.clone();
    while let Some(card) = next.waste.pop_back() {
        next.stock.push_back(card.turned_down());
    }

    next.check_invariants();
    next
}

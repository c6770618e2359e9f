//! Game session: one logical game, from deal to win.
//!
//! `GameSession` wires the pure rules to the history manager the way the
//! UI consumes them: a drag gesture becomes a [`MoveIntent`], a stock click
//! becomes [`GameSession::draw`], and every successful operation records
//! exactly one snapshot. The session owns its history exclusively and all
//! operations take `&mut self`, so no two operations can be in flight
//! against the same game.
//!
//! The session never sees pixels. Drop-target hit-testing happens in the
//! UI layer, which reports its result as a `PileRef`.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardRun, GameConfig, GameRng, GameState, PileRef};
use crate::history::History;
use crate::rules::{apply_move, draggable_run, draw_from_stock, is_valid_move};

/// A proposed move, as reported by the UI layer.
///
/// `cards` is the dragged run as handed out by [`GameSession::pick_up`];
/// the session re-validates the drop but trusts the run itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Pile the drag started from.
    pub source: PileRef,
    /// The dragged run, bottom-most card first.
    pub cards: CardRun,
    /// Pile the drag ended over.
    pub target: PileRef,
}

impl MoveIntent {
    /// Bundle a source, run, and target into an intent.
    #[must_use]
    pub fn new(source: PileRef, cards: CardRun, target: PileRef) -> Self {
        Self {
            source,
            cards,
            target,
        }
    }
}

/// An in-progress game: rule configuration plus snapshot history.
///
/// ## Example
///
/// ```
/// use klondike_core::{GameConfig, GameSession};
///
/// let mut session = GameSession::new(GameConfig::default(), 42);
/// assert_eq!(session.state().stock.len(), 24);
///
/// session.draw();
/// assert_eq!(session.state().waste.len(), 3);
///
/// assert!(session.undo());
/// assert!(session.state().waste.is_empty());
/// assert!(session.redo());
/// assert_eq!(session.state().waste.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    history: History,
}

impl GameSession {
    /// Deal a new game from a seed.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Deal a new game from an injected RNG.
    #[must_use]
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        Self {
            config,
            history: History::new(GameState::deal(&mut rng)),
        }
    }

    /// The session's rule configuration.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The currently visible state: always `history[cursor]`.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.history.current()
    }

    /// The snapshot history (read-only; mutation goes through the session).
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The run a touch on `card` in `source` picks up.
    ///
    /// Empty means the gesture should be aborted (face-down card, buried
    /// waste card, or a pile drags never start from).
    #[must_use]
    pub fn pick_up(&self, card: Card, source: PileRef) -> CardRun {
        draggable_run(card, source, self.state())
    }

    /// Attempt a move. Records and returns `true` if it was legal;
    /// otherwise leaves the game untouched and returns `false` so the UI
    /// can animate the drag back to its origin.
    pub fn try_move(&mut self, intent: &MoveIntent) -> bool {
        if !is_valid_move(&intent.cards, intent.target, self.state()) {
            return false;
        }
        let next = apply_move(self.state(), &intent.cards, intent.source, intent.target);
        self.history.record(next);
        true
    }

    /// Stock click: draw the configured number of cards, or recycle the
    /// waste when the stock is empty.
    ///
    /// With both piles empty nothing changes, and nothing is recorded —
    /// an identical snapshot would only pollute the undo chain.
    pub fn draw(&mut self) {
        let state = self.state();
        if state.stock.is_empty() && state.waste.is_empty() {
            return;
        }
        let next = draw_from_stock(state, self.config.draw_count);
        self.history.record(next);
    }

    /// Step back one state. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Step forward one state. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Is there a state to undo to?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Is there a state to redo to?
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// All four foundations complete?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state().is_won()
    }

    /// Abandon the current game and deal a fresh one.
    pub fn new_game(&mut self, seed: u64) {
        let mut rng = GameRng::new(seed);
        self.history.reset(GameState::deal(&mut rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    use crate::core::{Rank, Suit};

    #[test]
    fn test_new_session_shape() {
        let session = GameSession::new(GameConfig::default(), 42);

        assert_eq!(session.state().stock.len(), 24);
        assert!(session.state().waste.is_empty());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert!(!session.is_won());
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameSession::new(GameConfig::default(), 7);
        let b = GameSession::new(GameConfig::default(), 7);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_draw_respects_configured_count() {
        let mut draw_one = GameSession::new(GameConfig::default().with_draw_count(1), 42);
        draw_one.draw();
        assert_eq!(draw_one.state().waste.len(), 1);

        let mut draw_three = GameSession::new(GameConfig::default(), 42);
        draw_three.draw();
        assert_eq!(draw_three.state().waste.len(), 3);
    }

    #[test]
    fn test_draw_records_history() {
        let mut session = GameSession::new(GameConfig::default(), 42);
        session.draw();

        assert!(session.can_undo());
        assert!(session.undo());
        assert!(session.state().waste.is_empty());
        assert!(session.redo());
        assert_eq!(session.state().waste.len(), 3);
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut session = GameSession::new(GameConfig::default(), 42);
        let before = session.state().clone();

        // Whatever the deal, dropping on the stock is always illegal
        let top = *session.state().tableau[0].last().unwrap();
        let intent = MoveIntent::new(PileRef::Tableau(0), smallvec![top], PileRef::Stock);

        assert!(!session.try_move(&intent));
        assert_eq!(*session.state(), before);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_pick_up_face_up_tableau_top() {
        let session = GameSession::new(GameConfig::default(), 42);

        for (i, pile) in session.state().tableau.iter().enumerate() {
            let top = *pile.last().unwrap();
            let run = session.pick_up(top, PileRef::Tableau(i));
            assert_eq!(run.len(), 1, "tableau {i} top is a single-card run");
            assert_eq!(run[0].id(), top.id());
        }
    }

    #[test]
    fn test_pick_up_face_down_card_aborts() {
        let session = GameSession::new(GameConfig::default(), 42);

        // Tableau 1's bottom card is face-down
        let buried = *session.state().tableau[1].front().unwrap();
        assert!(!buried.face_up);
        assert!(session.pick_up(buried, PileRef::Tableau(1)).is_empty());
    }

    #[test]
    fn test_ace_from_tableau_top_to_foundation() {
        let mut session = GameSession::new(GameConfig::default(), 42);

        // Craft a board with the A♠ face-up on tableau 0 over one
        // face-down card, everything else in the stock.
        let mut state = session.state().clone();
        let mut cards: Vec<Card> =
            state.piles().flatten().map(|c| c.turned_down()).collect();
        let ace_pos = cards
            .iter()
            .position(|c| c.id() == (Suit::Spades, Rank::Ace))
            .unwrap();
        let ace = cards.remove(ace_pos);
        let base = cards.pop().unwrap();

        state.waste.clear();
        state.foundations = std::array::from_fn(|_| crate::core::Pile::new());
        state.tableau = std::array::from_fn(|_| crate::core::Pile::new());
        state.tableau[0].push_back(base);
        state.tableau[0].push_back(ace.turned_up());
        state.stock = cards.into_iter().collect();
        session.history.record(state);

        let run = session.pick_up(ace.turned_up(), PileRef::Tableau(0));
        assert_eq!(run.len(), 1);

        let intent = MoveIntent::new(PileRef::Tableau(0), run, PileRef::Foundation(3));
        assert!(session.try_move(&intent));

        assert_eq!(session.state().foundations[3].len(), 1);
        assert_eq!(
            session.state().foundations[3].front().unwrap().id(),
            (Suit::Spades, Rank::Ace)
        );
        // The card underneath flipped face-up
        assert!(session.state().tableau[0].last().unwrap().face_up);
    }

    #[test]
    fn test_move_after_undo_prunes_redo() {
        let mut session = GameSession::new(GameConfig::default(), 42);
        session.draw();
        session.draw();
        assert!(session.undo());
        assert!(session.can_redo());

        session.draw();
        assert!(!session.can_redo());
    }

    #[test]
    fn test_new_game_resets_history() {
        let mut session = GameSession::new(GameConfig::default(), 42);
        session.draw();
        session.draw();

        session.new_game(99);

        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.state().stock.len(), 24);
        assert_eq!(*session.state(), GameSession::new(GameConfig::default(), 99).state().clone());
    }

    #[test]
    fn test_won_session() {
        let mut session = GameSession::new(GameConfig::default(), 42);
        assert!(!session.is_won());

        // Hand-craft a won state and record it: all 52 cards on the
        // foundations.
        let mut won = session.state().clone();
        won.stock.clear();
        won.waste.clear();
        won.tableau = std::array::from_fn(|_| crate::core::Pile::new());
        won.foundations = std::array::from_fn(|_| crate::core::Pile::new());
        for (i, suit) in Suit::ALL.iter().enumerate() {
            for rank in Rank::ALL {
                won.foundations[i].push_back(Card::new(*suit, rank).turned_up());
            }
        }
        session.history.record(won);

        assert!(session.is_won());
    }
}

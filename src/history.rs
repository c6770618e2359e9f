//! Undo/redo history: a sequence of snapshots plus a cursor.
//!
//! The history exclusively owns every recorded `GameState`; the live state
//! is always `history[cursor]`. Undo and redo only move the cursor — they
//! never record — so redoing after several undos replays exactly the
//! previously recorded future rather than re-deriving it. Recording while
//! the cursor sits in the middle discards the redo branch first.
//!
//! Snapshots are cheap: piles are persistent vectors, so each entry shares
//! structure with its neighbors and a 52-card snapshot costs O(1) to store.

use im::Vector;

use crate::core::GameState;

/// Linear undo/redo history over game-state snapshots.
///
/// ## Example
///
/// ```
/// use klondike_core::{draw_from_stock, GameRng, GameState, History};
///
/// let initial = GameState::deal(&mut GameRng::new(42));
/// let mut history = History::new(initial.clone());
/// assert!(!history.can_undo());
///
/// history.record(draw_from_stock(&initial, 3));
/// assert!(history.can_undo());
///
/// assert!(history.undo());
/// assert_eq!(*history.current(), initial);
/// assert!(history.can_redo());
/// ```
#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vector<GameState>,
    cursor: usize,
}

impl History {
    /// Start a fresh history holding only the initial state.
    #[must_use]
    pub fn new(initial: GameState) -> Self {
        Self {
            snapshots: Vector::unit(initial),
            cursor: 0,
        }
    }

    /// The currently visible state.
    #[must_use]
    pub fn current(&self) -> &GameState {
        &self.snapshots[self.cursor]
    }

    /// Record a new state, discarding any redo branch.
    ///
    /// This is the single mutation entry point: every successful move,
    /// draw, or recycle records exactly once.
    pub fn record(&mut self, state: GameState) {
        state.check_invariants();
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(state);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step the cursor back one state. Returns whether it moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor forward one state. Returns whether it moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Discard everything and restart from a new initial state.
    pub fn reset(&mut self, initial: GameState) {
        self.snapshots = Vector::unit(initial);
        self.cursor = 0;
    }

    /// Is there a state before the cursor?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Is there a state after the cursor?
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of recorded snapshots. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// A history is never empty; it always holds the initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the currently visible state.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

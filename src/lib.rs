//! # klondike-core
//!
//! A Klondike solitaire rules and state-history engine.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: every operation takes a `GameState` and
//!    returns a brand-new one. No pile or card is ever aliased between two
//!    history entries, so undo/redo is just cursor movement.
//!
//! 2. **Total functions over exceptions**: illegal moves come back as
//!    `false` or an unchanged state, never a panic. Invariant violations
//!    are programming defects, caught by debug assertions.
//!
//! 3. **No UI concepts**: the engine receives pile references and card
//!    runs, never pixels, rectangles, or gesture events. Hit-testing a
//!    drop position against on-screen piles is the UI layer's job.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: piles are `im` vectors, so cloning a
//!   full 52-card state for the history is O(1).
//!
//! - **Injected Randomness**: the shuffle is the only nondeterminism, and
//!   it comes from a seeded `GameRng` — any deal can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: cards, piles, game state, RNG, configuration
//! - `rules`: move legality, move execution, stock cycling
//! - `history`: undo/redo over state snapshots
//! - `session`: one logical game wiring rules to history
//!
//! ## Usage
//!
//! ```
//! use klondike_core::{GameConfig, GameSession, PileRef};
//!
//! let mut session = GameSession::new(GameConfig::default(), 42);
//!
//! // Stock click: draw three
//! session.draw();
//! assert_eq!(session.state().waste.len(), 3);
//!
//! // Pick up the top of tableau 3 and try to drop it on a foundation
//! let top = *session.state().tableau[3].last().unwrap();
//! let run = session.pick_up(top, PileRef::Tableau(3));
//! assert!(!run.is_empty());
//!
//! // The draw is undoable
//! assert!(session.undo());
//! assert!(session.state().waste.is_empty());
//! ```

pub mod core;
pub mod history;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    full_deck, Card, CardRun, GameConfig, GameRng, GameRngState, GameState, Pile, PileRef, Rank,
    Suit, DEFAULT_DRAW_COUNT, FOUNDATION_COUNT, TABLEAU_COUNT,
};

pub use crate::rules::{apply_move, draggable_run, draw_from_stock, is_valid_move, recycle_waste};

pub use crate::history::History;

pub use crate::session::{GameSession, MoveIntent};

//! Core types: cards, piles, game state, RNG, configuration.
//!
//! This module contains the data model the rules engine operates on.
//! Rule logic lives in [`crate::rules`]; nothing here decides legality.

pub mod card;
pub mod config;
pub mod pile;
pub mod rng;
pub mod state;

pub use card::{full_deck, Card, Rank, Suit};
pub use config::{GameConfig, DEFAULT_DRAW_COUNT};
pub use pile::{CardRun, Pile, PileRef, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;

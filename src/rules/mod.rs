//! The move rules engine: legality, execution, stock cycling.
//!
//! Everything here is a pure function from `GameState` to either a verdict
//! or a new `GameState`. Validation ([`is_valid_move`]) and execution
//! ([`apply_move`]) are deliberately separate passes: the UI asks "may I?"
//! while the drag is in flight and "do it" on drop, and the executor
//! trusts that the answer was yes.

pub mod execute;
pub mod stock;
pub mod validate;

pub use execute::apply_move;
pub use stock::{draw_from_stock, recycle_waste};
pub use validate::{draggable_run, is_valid_move};

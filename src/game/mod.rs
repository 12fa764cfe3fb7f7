//! The multi-agent game contract.
//!
//! - [`GameState`] — What an environment must expose to be tree-searched
//! - [`Evaluator`] — Scores a state from the maximizer's point of view
//! - [`Rotation`] — Whose turn it is, and how many plies have been played

mod evaluator;
mod rotation;
mod state;

pub use evaluator::*;
pub use rotation::*;
pub use state::*;

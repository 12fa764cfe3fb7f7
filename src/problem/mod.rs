//! The search problem contract.
//!
//! - [`Problem`] — What an environment must expose to be graph-searched
//! - [`Heuristic`] — Estimates of remaining cost to the nearest goal
//! - [`Null`] — The trivial zero heuristic

mod heuristic;
mod problem;

pub use heuristic::*;
pub use problem::*;

//! Grid maze as a reference [`Problem`].
//!
//! Mazes are read from text, one character per cell:
//!
//! ```text
//! %%%%%%%
//! %P  % %
//! % %   %
//! %   %.%
//! %%%%%%%
//! ```
//!
//! - `%` — wall
//! - `P` — start
//! - `.` — goal
//! - ` ` — open
//!
//! Every move costs one step. [`manhattan`] is a consistent heuristic.

mod direction;
mod maze;

pub use direction::*;
pub use maze::*;

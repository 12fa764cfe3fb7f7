//! Explicit game trees.
//!
//! An [`Outline`] spells out every position of a finite game up front.
//! Turns alternate through the agents level by level, so the same tree
//! read with two or three agents describes two different games.

mod branch;
mod outline;

pub use branch::*;
pub use outline::*;

//! Frontier disciplines for the graph-search loop.
//!
//! The loop only ever pushes items with a key and pops the next one. What
//! "next" means is the whole difference between the uninformed strategies:
//!
//! - [`Stack`] — last in, first out (depth-first)
//! - [`Queue`] — first in, first out (breadth-first)
//! - [`Heap`] — smallest key first, ties in insertion order (uniform-cost, A*)

mod heap;
mod queue;
mod stack;

pub use heap::*;
pub use queue::*;
pub use stack::*;

use crate::*;

/// An ordered collection of items awaiting expansion.
///
/// `key` is the priority of the item. Orderings that do not need one
/// ignore it.
pub trait Frontier<T>: Default {
    fn push(&mut self, item: T, key: Cost);
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

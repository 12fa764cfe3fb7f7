//! Search nodes and the arena that owns them.
//!
//! Every node generated during one search call is stored in a [`Tree`], an
//! index-addressed `petgraph` arena. A node's parent is the source of its
//! single incoming edge and the action that produced it is that edge's
//! weight, so walking back to the root needs no reference counting.
//!
//! - [`Data`] — The immutable record stored per node (state + path cost)
//! - [`Node`] — A cheap, copyable view of one node with navigation methods
//! - [`Tree`] — The arena

mod data;
mod node;
mod tree;

pub use data::*;
pub use node::*;
pub use tree::*;

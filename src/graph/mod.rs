//! Explicit weighted digraph as a reference [`Problem`].
//!
//! Small hand-written networks pin down exact search behavior in tests;
//! random ones (via [`Arbitrary`]) check the optimality properties of
//! each strategy against `petgraph`'s own shortest-path algorithms.

mod network;

pub use network::*;

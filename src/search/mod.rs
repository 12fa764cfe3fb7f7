//! Graph search over any [`Problem`].
//!
//! One loop ([`Search`]) does all the work. A [`Discipline`] picks the
//! frontier ordering and the key each new node is pushed with, and that is
//! the only thing that differs between strategies:
//!
//! | Strategy       | Discipline     | Frontier | Key                          |
//! |----------------|----------------|----------|------------------------------|
//! | depth-first    | [`DepthFirst`]   | [`Stack`] | —                           |
//! | breadth-first  | [`BreadthFirst`] | [`Queue`] | —                           |
//! | uniform-cost   | [`UniformCost`]  | [`Heap`]  | g = cost of actions so far  |
//! | A*             | [`AStar`]        | [`Heap`]  | g + h(state)                |
//!
//! # Duplicate States
//!
//! A state is marked visited when its node is popped, never when it is
//! pushed. Later arrivals at a visited state are discarded, even if they
//! are cheaper. With non-negative costs this is exact for uniform-cost
//! search, and for A* whenever the heuristic is consistent.

mod discipline;
mod outcome;
mod search;

pub use discipline::*;
pub use outcome::*;
pub use search::*;

use crate::*;

/// Depth-first graph search. Neither shortest nor cheapest.
pub fn dfs<P>(problem: &P) -> anyhow::Result<Option<Vec<P::A>>>
where
    P: Problem,
{
    Search::new(problem, DepthFirst).run().map(Outcome::into_path)
}

/// Breadth-first graph search. Fewest actions.
pub fn bfs<P>(problem: &P) -> anyhow::Result<Option<Vec<P::A>>>
where
    P: Problem,
{
    Search::new(problem, BreadthFirst).run().map(Outcome::into_path)
}

/// Uniform-cost graph search. Cheapest path for non-negative step costs.
pub fn ucs<P>(problem: &P) -> anyhow::Result<Option<Vec<P::A>>>
where
    P: Problem,
{
    Search::new(problem, UniformCost).run().map(Outcome::into_path)
}

/// A* graph search. Cheapest path for consistent heuristics.
pub fn astar<P, H>(problem: &P, heuristic: H) -> anyhow::Result<Option<Vec<P::A>>>
where
    P: Problem,
    H: Heuristic<P>,
{
    Search::new(problem, AStar(heuristic))
        .run()
        .map(Outcome::into_path)
}

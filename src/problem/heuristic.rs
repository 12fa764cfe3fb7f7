use crate::*;

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// Contract, unchecked at runtime:
/// - never negative
/// - admissible (never overestimates) for A* to return a cheapest path
/// - consistent (h(s) <= step(s, s') + h(s')) for that to survive
///   duplicate-state pruning
///
/// Any `Fn(&S, &P) -> Cost` is a heuristic.
pub trait Heuristic<P>
where
    P: Problem,
{
    fn estimate(&self, state: &P::S, problem: &P) -> Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem,
    F: Fn(&P::S, &P) -> Cost,
{
    fn estimate(&self, state: &P::S, problem: &P) -> Cost {
        self(state, problem)
    }
}

/// The trivial heuristic. A* with `Null` is uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Null;

impl<P> Heuristic<P> for Null
where
    P: Problem,
{
    fn estimate(&self, _: &P::S, _: &P) -> Cost {
        0.
    }
}

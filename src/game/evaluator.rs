use crate::*;

/// Static score of a game state, higher is better for the maximizer.
///
/// Used on every leaf of the bounded search: won and lost states as well
/// as states where the ply budget ran out. Must be pure; it is called many
/// times on equal states.
///
/// Any `Fn(&G) -> Utility` is an evaluator.
pub trait Evaluator<G> {
    fn evaluate(&self, state: &G) -> Utility;
}

impl<G, F> Evaluator<G> for F
where
    F: Fn(&G) -> Utility,
{
    fn evaluate(&self, state: &G) -> Utility {
        self(state)
    }
}

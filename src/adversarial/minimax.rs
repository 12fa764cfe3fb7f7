use super::*;

/// Exhaustive minimax to a fixed number of plies.
///
/// The maximizer takes the largest child value and every other agent the
/// smallest. An agent left with no moves backs up the identity of its
/// fold: `-inf` for the maximizer, `+inf` for the others.
#[derive(Debug, Clone, Copy)]
pub struct Minimax<E> {
    depth: usize,
    evaluator: E,
}

impl<E> Minimax<E> {
    pub fn new(depth: usize, evaluator: E) -> Self {
        Self { depth, evaluator }
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<E> Minimax<E> {
    fn value<G>(&self, state: &G, turn: Rotation, expanded: &mut usize) -> Utility
    where
        G: GameState,
        E: Evaluator<G>,
    {
        if state.is_win() || state.is_lose() || turn.exhausted(self.depth) {
            return self.evaluator.evaluate(state);
        }
        let next = turn.next(state.agents());
        let mut values = Vec::new();
        for action in state.legal_actions(turn.agent()) {
            let child = state.successor(turn.agent(), &action);
            *expanded += 1;
            values.push(self.value(&child, next, expanded));
        }
        match turn.is_maximizer() {
            true => values.into_iter().fold(Utility::NEG_INFINITY, Utility::max),
            false => values.into_iter().fold(Utility::INFINITY, Utility::min),
        }
    }
}

impl<G, E> Adversary<G> for Minimax<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn name(&self) -> &'static str {
        "minimax"
    }
    fn search(&self, state: &G) -> anyhow::Result<Decision<G::A>> {
        root(
            Adversary::<G>::name(self),
            state,
            self.depth,
            &self.evaluator,
            |child, turn, _, expanded| Ok(self.value(child, turn, expanded)),
        )
    }
}

use super::*;

/// Minimax with alpha-beta pruning.
///
/// `alpha` is the best value the maximizer can already force higher up the
/// tree, `beta` the best any minimizer can already force. A node stops
/// looking at siblings once its value falls strictly outside that window,
/// so ties are still explored. The value and action at the root match
/// [`Minimax`] exactly; only the number of expanded states changes.
#[derive(Debug, Clone, Copy)]
pub struct AlphaBeta<E> {
    depth: usize,
    evaluator: E,
}

impl<E> AlphaBeta<E> {
    pub fn new(depth: usize, evaluator: E) -> Self {
        Self { depth, evaluator }
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<E> AlphaBeta<E> {
    fn value<G>(
        &self,
        state: &G,
        turn: Rotation,
        mut alpha: Utility,
        mut beta: Utility,
        expanded: &mut usize,
    ) -> Utility
    where
        G: GameState,
        E: Evaluator<G>,
    {
        if state.is_win() || state.is_lose() || turn.exhausted(self.depth) {
            return self.evaluator.evaluate(state);
        }
        let next = turn.next(state.agents());
        if turn.is_maximizer() {
            let mut v = Utility::NEG_INFINITY;
            for action in state.legal_actions(turn.agent()) {
                let child = state.successor(turn.agent(), &action);
                *expanded += 1;
                v = v.max(self.value(&child, next, alpha, beta, expanded));
                if v > beta {
                    return v;
                }
                alpha = alpha.max(v);
            }
            v
        } else {
            let mut v = Utility::INFINITY;
            for action in state.legal_actions(turn.agent()) {
                let child = state.successor(turn.agent(), &action);
                *expanded += 1;
                v = v.min(self.value(&child, next, alpha, beta, expanded));
                if v < alpha {
                    return v;
                }
                beta = beta.min(v);
            }
            v
        }
    }
}

impl<G, E> Adversary<G> for AlphaBeta<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn name(&self) -> &'static str {
        "alphabeta"
    }
    fn search(&self, state: &G) -> anyhow::Result<Decision<G::A>> {
        root(
            Adversary::<G>::name(self),
            state,
            self.depth,
            &self.evaluator,
            |child, turn, alpha, expanded| {
                Ok(self.value(child, turn, alpha, Utility::INFINITY, expanded))
            },
        )
    }
}

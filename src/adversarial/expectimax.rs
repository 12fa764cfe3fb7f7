use super::*;

/// Expectimax to a fixed number of plies.
///
/// The maximizer takes the largest child value. Every other agent is a
/// chance node that picks uniformly among its legal moves, so its value is
/// the plain mean of its children. A chance agent with nothing to pick
/// from has no mean and fails the whole search.
#[derive(Debug, Clone, Copy)]
pub struct Expectimax<E> {
    depth: usize,
    evaluator: E,
}

impl<E> Expectimax<E> {
    pub fn new(depth: usize, evaluator: E) -> Self {
        Self { depth, evaluator }
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<E> Expectimax<E> {
    fn value<G>(&self, state: &G, turn: Rotation, expanded: &mut usize) -> anyhow::Result<Utility>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        if state.is_win() || state.is_lose() || turn.exhausted(self.depth) {
            return Ok(self.evaluator.evaluate(state));
        }
        let next = turn.next(state.agents());
        let actions = state.legal_actions(turn.agent());
        if actions.is_empty() && !turn.is_maximizer() {
            anyhow::bail!(
                "chance agent {} has no legal action at ply {}",
                turn.agent(),
                turn.ply()
            );
        }
        let mut sum = 0.;
        let mut max = Utility::NEG_INFINITY;
        for action in actions.iter() {
            let child = state.successor(turn.agent(), action);
            *expanded += 1;
            let v = self.value(&child, next, expanded)?;
            sum += v;
            max = max.max(v);
        }
        match turn.is_maximizer() {
            true => Ok(max),
            false => Ok(sum / actions.len() as Utility),
        }
    }
}

impl<G, E> Adversary<G> for Expectimax<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn name(&self) -> &'static str {
        "expectimax"
    }
    fn search(&self, state: &G) -> anyhow::Result<Decision<G::A>> {
        root(
            Adversary::<G>::name(self),
            state,
            self.depth,
            &self.evaluator,
            |child, turn, _, expanded| self.value(child, turn, expanded),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_nodes_weigh_moves_equally() {
        let ref outline = Outline::new(
            2,
            Branch::fork(vec![
                Branch::fork(vec![Branch::leaf(-9.), Branch::leaf(9.), Branch::leaf(6.)]),
                Branch::fork(vec![Branch::leaf(1.)]),
            ]),
        );
        let decision = Expectimax::new(1, Outline::score).search(outline).unwrap();
        assert_eq!(decision.action, 0);
        assert_eq!(decision.value, 2.);
        assert_eq!(decision.expanded, 6);
        let careful = Minimax::new(1, Outline::score).search(outline).unwrap();
        assert_eq!(careful.action, 1);
    }
}

use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One-step look-ahead for the maximizer.
///
/// Scores the state after each of its own legal moves and ignores the other
/// agents entirely. Ties are broken at random by a rng reseeded on every
/// call, so the same state always yields the same move.
#[derive(Debug, Clone, Copy)]
pub struct Reflex<E> {
    evaluator: E,
    seed: u64,
}

impl<E> Reflex<E> {
    pub fn new(evaluator: E) -> Self {
        Self::seeded(evaluator, REFLEX_SEED)
    }
    pub fn seeded(evaluator: E, seed: u64) -> Self {
        Self { evaluator, seed }
    }
}

impl<G, E> Adversary<G> for Reflex<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn name(&self) -> &'static str {
        "reflex"
    }
    fn search(&self, state: &G) -> anyhow::Result<Decision<G::A>> {
        let actions = state.legal_actions(MAXIMIZER);
        if actions.is_empty() {
            anyhow::bail!("reflex: maximizer has no legal action");
        }
        let expanded = actions.len();
        let scored = actions
            .into_iter()
            .map(|action| {
                let v = self
                    .evaluator
                    .evaluate(&state.successor(MAXIMIZER, &action));
                (action, v)
            })
            .collect::<Vec<(G::A, Utility)>>();
        let best = scored
            .iter()
            .map(|(_, v)| *v)
            .fold(Utility::NEG_INFINITY, Utility::max);
        let mut ties = scored
            .into_iter()
            .filter(|(_, v)| *v == best)
            .collect::<Vec<(G::A, Utility)>>();
        let ref mut rng = SmallRng::seed_from_u64(self.seed);
        let pick = rng.random_range(0..ties.len());
        let (action, value) = ties.swap_remove(pick);
        Ok(Decision::from((action, value, expanded)).logged(Adversary::<G>::name(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> Outline {
        Outline::new(
            2,
            Branch::fork(vec![
                Branch::leaf(3.),
                Branch::leaf(7.),
                Branch::leaf(-2.),
                Branch::leaf(7.),
            ]),
        )
    }

    #[test]
    fn picks_among_the_best() {
        for seed in 0..32 {
            let decision = Reflex::seeded(Outline::score, seed).search(&outline()).unwrap();
            assert!(decision.action == 1 || decision.action == 3);
            assert_eq!(decision.value, 7.);
            assert_eq!(decision.expanded, 4);
        }
    }

    #[test]
    fn same_seed_same_move() {
        let reflex = Reflex::new(Outline::score);
        let first = reflex.decide(&outline()).unwrap();
        for _ in 0..8 {
            assert_eq!(reflex.decide(&outline()).unwrap(), first);
        }
    }
}

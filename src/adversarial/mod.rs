//! Bounded-depth game-tree search over any [`GameState`].
//!
//! Every strategy shares one recursive shape: agents take turns in index
//! order, a ply completes when the last agent has moved, and recursion
//! stops at a won or lost state or once the ply budget is spent. The
//! [`Evaluator`] scores every such leaf.
//!
//! | Strategy       | Maximizer | Other agents          |
//! |----------------|-----------|-----------------------|
//! | [`Minimax`]    | max       | min                   |
//! | [`AlphaBeta`]  | max       | min, with pruning     |
//! | [`Expectimax`] | max       | mean over legal moves |
//! | [`Reflex`]     | one-step look-ahead, random among the best |
//!
//! # Root
//!
//! The root always belongs to the maximizer and always returns one of its
//! legal actions. Among equal values the earliest action wins: a later one
//! only replaces the incumbent when it is strictly better. When the budget
//! is zero or the root is already won or lost, nothing is expanded, the
//! value is the evaluation of the root and the first legal action is
//! returned.

mod alphabeta;
mod decision;
mod expectimax;
mod minimax;
mod reflex;

pub use alphabeta::*;
pub use decision::*;
pub use expectimax::*;
pub use minimax::*;
pub use reflex::*;

use crate::*;

/// A policy that picks the maximizer's move.
pub trait Adversary<G>
where
    G: GameState,
{
    /// Short label for logs and reports.
    fn name(&self) -> &'static str;

    /// The chosen action along with its backed-up value.
    fn search(&self, state: &G) -> anyhow::Result<Decision<G::A>>;

    /// Just the chosen action.
    fn decide(&self, state: &G) -> anyhow::Result<G::A> {
        self.search(state).map(|decision| decision.action)
    }
}

/// Shared root of the tree strategies.
///
/// `value` backs up the value of one root child. It receives the child,
/// the turn after the root, the best value secured so far (which
/// alpha-beta uses as its alpha) and the expansion counter.
pub(crate) fn root<G, E, F>(
    name: &'static str,
    state: &G,
    depth: usize,
    evaluator: &E,
    mut value: F,
) -> anyhow::Result<Decision<G::A>>
where
    G: GameState,
    E: Evaluator<G>,
    F: FnMut(&G, Rotation, Utility, &mut usize) -> anyhow::Result<Utility>,
{
    let actions = state.legal_actions(MAXIMIZER);
    let Some(first) = actions.first().cloned() else {
        anyhow::bail!("{}: maximizer has no legal action at the root", name);
    };
    if depth == 0 || state.is_win() || state.is_lose() {
        return Ok(Decision::from((first, evaluator.evaluate(state), 0)).logged(name));
    }
    let turn = Rotation::default().next(state.agents());
    let mut expanded = 0;
    let mut best = (first, Utility::NEG_INFINITY);
    let mut seen = false;
    for action in actions {
        let child = state.successor(MAXIMIZER, &action);
        expanded += 1;
        let v = value(&child, turn, best.1, &mut expanded)?;
        if !seen || v > best.1 {
            best = (action, v);
            seen = true;
        }
    }
    Ok(Decision::from((best.0, best.1, expanded)).logged(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// agent 0 adds one of `MINE` to `mine`; adversaries add
    /// one of `THEIRS` to `noise`. actions index into those tables.
    /// nothing ever ends.
    #[derive(Debug, Clone)]
    struct Dial {
        agents: usize,
        mine: i32,
        noise: i32,
        stuck: bool,
    }

    const MINE: [i32; 4] = [-1, 2, 1, 2];
    const THEIRS: [i32; 3] = [-5, 5, 7];

    impl Dial {
        fn new(agents: usize) -> Self {
            Self {
                agents,
                mine: 0,
                noise: 0,
                stuck: false,
            }
        }
        fn mine(&self) -> Utility {
            self.mine as Utility
        }
    }

    impl GameState for Dial {
        type A = usize;
        fn legal_actions(&self, agent: Agent) -> Vec<usize> {
            match (agent, self.stuck) {
                (0, _) => (0..MINE.len()).collect(),
                (_, true) => vec![],
                (_, false) => (0..THEIRS.len()).collect(),
            }
        }
        fn successor(&self, agent: Agent, action: &usize) -> Self {
            let mut next = self.clone();
            match agent {
                0 => next.mine += MINE[*action],
                _ => next.noise += THEIRS[*action],
            }
            next
        }
        fn agents(&self) -> usize {
            self.agents
        }
        fn is_win(&self) -> bool {
            false
        }
        fn is_lose(&self) -> bool {
            false
        }
    }

    fn scenario() -> Outline {
        Outline::new(
            2,
            Branch::fork(vec![
                Branch::fork(vec![Branch::leaf(3.), Branch::leaf(5.)]),
                Branch::fork(vec![Branch::leaf(2.), Branch::leaf(9.)]),
            ]),
        )
    }

    #[test]
    fn minimax_takes_the_best_worst_case() {
        let decision = Minimax::new(1, Outline::score).search(&scenario()).unwrap();
        assert_eq!(decision.action, 0);
        assert_eq!(decision.value, 3.);
        assert_eq!(decision.expanded, 6);
    }

    #[test]
    fn alphabeta_prunes_the_second_branch() {
        let decision = AlphaBeta::new(1, Outline::score).search(&scenario()).unwrap();
        assert_eq!(decision.action, 0);
        assert_eq!(decision.value, 3.);
        assert_eq!(decision.expanded, 5);
    }

    #[test]
    fn expectimax_averages_the_adversary() {
        let decision = Expectimax::new(1, Outline::score).search(&scenario()).unwrap();
        assert_eq!(decision.action, 1);
        assert_eq!(decision.value, 5.5);
    }

    #[test]
    fn zero_depth_evaluates_the_root() {
        let ref dial = Dial::new(2);
        let eval = |state: &Dial| state.mine() + 10.;
        for decision in [
            Minimax::new(0, eval).search(dial).unwrap(),
            AlphaBeta::new(0, eval).search(dial).unwrap(),
            Expectimax::new(0, eval).search(dial).unwrap(),
        ] {
            assert_eq!(decision.action, 0);
            assert_eq!(decision.value, 10.);
            assert_eq!(decision.expanded, 0);
        }
    }

    #[test]
    fn ties_go_to_the_earliest_action() {
        let ref dial = Dial::new(2);
        let greedy = Minimax::new(1, Dial::mine).search(dial).unwrap();
        assert_eq!(greedy.action, 1);
        assert_eq!(greedy.value, 2.);
        let pruned = AlphaBeta::new(1, Dial::mine).search(dial).unwrap();
        assert_eq!(pruned.action, 1);
        let mean = Expectimax::new(1, Dial::mine).search(dial).unwrap();
        assert_eq!(mean.action, 1);
    }

    #[test]
    fn invariant_evaluator_makes_expectimax_greedy() {
        for agents in 1..=3 {
            for depth in 1..=2 {
                let ref dial = Dial::new(agents);
                let expect = Expectimax::new(depth, Dial::mine).search(dial).unwrap();
                let reflex = Reflex::new(Dial::mine).search(dial).unwrap();
                assert_eq!(MINE[expect.action], MINE[reflex.action]);
                assert_eq!(expect.action, 1);
                assert_eq!(expect.value, 2. * depth as Utility);
            }
        }
    }

    #[test]
    fn stuck_chance_agent_is_an_error() {
        let ref dial = Dial {
            stuck: true,
            ..Dial::new(2)
        };
        assert!(Expectimax::new(1, Dial::mine).search(dial).is_err());
        let stuck = Minimax::new(1, Dial::mine).search(dial).unwrap();
        assert_eq!(stuck.value, Utility::INFINITY);
    }

    #[test]
    fn maximizer_without_moves_is_an_error() {
        let ref leaf = Outline::new(2, Branch::leaf(1.));
        assert!(Minimax::new(2, Outline::score).decide(leaf).is_err());
        assert!(AlphaBeta::new(2, Outline::score).decide(leaf).is_err());
        assert!(Expectimax::new(2, Outline::score).decide(leaf).is_err());
        assert!(Reflex::new(Outline::score).decide(leaf).is_err());
    }

    #[test]
    fn alphabeta_agrees_with_minimax() {
        for _ in 0..128 {
            let ref outline = Outline::random();
            for depth in 1..=3 {
                let full = Minimax::new(depth, Outline::score).search(outline).unwrap();
                let pruned = AlphaBeta::new(depth, Outline::score).search(outline).unwrap();
                assert_eq!(full.action, pruned.action);
                assert_eq!(full.value, pruned.value);
                assert!(pruned.expanded <= full.expanded);
            }
        }
    }

    #[test]
    fn expectimax_is_never_below_minimax() {
        for _ in 0..128 {
            let ref outline = Outline::random();
            let full = Minimax::new(DEPTH, Outline::score).search(outline).unwrap();
            let mean = Expectimax::new(DEPTH, Outline::score).search(outline).unwrap();
            assert!(mean.value >= full.value);
        }
    }
}

use crate::*;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

/// The generic graph-search loop.
///
/// Owns everything one call needs, and nothing outlives [`Search::run`]:
/// - the node arena ([`Tree`])
/// - the frontier chosen by the discipline
/// - the set of states already expanded
///
/// Nothing is shared between two `Search` values, so independent searches
/// may run on separate threads as long as the problem is `Sync`.
///
/// # Loop
///
/// 1. A goal start state returns the empty path with zero expansions
/// 2. The root node is pushed
/// 3. An empty frontier means there is no solution
/// 4. The next node is popped; a goal node returns its path (the only success exit)
/// 5. A node whose state is already visited is dropped
/// 6. Otherwise its state is marked visited and every successor is pushed
pub struct Search<'p, P, D>
where
    P: Problem,
    D: Discipline<P>,
{
    problem: &'p P,
    discipline: D,
    tree: Tree<P::S, P::A>,
    frontier: D::F,
    visited: HashSet<P::S>,
    expanded: usize,
}

impl<'p, P, D> Search<'p, P, D>
where
    P: Problem,
    D: Discipline<P>,
{
    pub fn new(problem: &'p P, discipline: D) -> Self {
        Self {
            problem,
            discipline,
            tree: Tree::default(),
            frontier: D::F::default(),
            visited: HashSet::new(),
            expanded: 0,
        }
    }

    pub fn run(mut self) -> anyhow::Result<Outcome<P::A>> {
        let start = self.problem.start();
        if self.problem.is_goal(&start) {
            return Ok(self.report(None));
        }
        let root = self.tree.seed(start);
        let key = self.discipline.key(self.problem, self.tree.at(root))?;
        self.frontier.push(root, key);
        while let Some(index) = self.frontier.pop() {
            let state = self.tree.at(index).state().clone();
            if self.problem.is_goal(&state) {
                return Ok(self.report(Some(index)));
            }
            if !self.visited.insert(state.clone()) {
                continue;
            }
            self.expand(index, &state)?;
        }
        Ok(self.exhausted())
    }

    fn expand(&mut self, index: NodeIndex, state: &P::S) -> anyhow::Result<()> {
        self.expanded += 1;
        log::trace!("{:<16}{:?}", "expanding", state);
        for successor in self.problem.successors(state) {
            let child = self.tree.grow(index, successor);
            let key = self.discipline.key(self.problem, self.tree.at(child))?;
            self.frontier.push(child, key);
        }
        Ok(())
    }

    /// solved, either at the root (None) or at a popped goal node
    fn report(&self, goal: Option<NodeIndex>) -> Outcome<P::A> {
        let (path, cost) = match goal {
            Some(index) => (self.tree.at(index).solution(), self.tree.at(index).cost()),
            None => (Vec::new(), 0.),
        };
        log::debug!(
            "{:<16}{:<20}{:<20}{:<20}",
            self.discipline.name(),
            format!("actions {}", path.len()),
            format!("cost {}", cost),
            format!("expanded {}", self.expanded),
        );
        Outcome {
            path: Some(path),
            cost: Some(cost),
            expanded: self.expanded,
            generated: self.generated(),
        }
    }

    fn exhausted(&self) -> Outcome<P::A> {
        log::debug!(
            "{:<16}{:<40}{:<20}",
            self.discipline.name(),
            "frontier exhausted",
            format!("expanded {}", self.expanded),
        );
        Outcome {
            path: None,
            cost: None,
            expanded: self.expanded,
            generated: self.generated(),
        }
    }

    /// every node but the root was generated as a successor
    fn generated(&self) -> usize {
        self.tree.n().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A→B (1), A→C (5), B→D (1), C→D (1); goal D
    fn diamond() -> Network {
        Network::new(
            &[("A", "B", 1.), ("A", "C", 5.), ("B", "D", 1.), ("C", "D", 1.)],
            "A",
            "D",
        )
    }

    #[test]
    fn start_goal_needs_no_expansion() {
        let network = Network::new(&[("A", "B", 1.)], "A", "A");
        for outcome in [
            Search::new(&network, DepthFirst).run().unwrap(),
            Search::new(&network, BreadthFirst).run().unwrap(),
            Search::new(&network, UniformCost).run().unwrap(),
            Search::new(&network, AStar(Null)).run().unwrap(),
        ] {
            assert_eq!(outcome.solution(), Some(&[][..]));
            assert_eq!(outcome.expanded, 0);
            assert_eq!(outcome.generated, 0);
        }
    }

    #[test]
    fn unreachable_goal_is_no_solution() {
        let network = Network::new(&[("A", "B", 1.), ("C", "D", 1.)], "A", "D");
        let outcome = Search::new(&network, BreadthFirst).run().unwrap();
        assert!(!outcome.is_solved());
        assert_eq!(outcome.cost, None);
        assert_eq!(outcome.expanded, 2);
        assert_eq!(dfs(&network).unwrap(), None);
        assert_eq!(ucs(&network).unwrap(), None);
        assert_eq!(astar(&network, Null).unwrap(), None);
    }

    #[test]
    fn depth_first_follows_the_last_successor() {
        let ref network = diamond();
        let path = dfs(network).unwrap().unwrap();
        assert_eq!(network.describe(&path), vec!["A->C", "C->D"]);
        assert_eq!(network.cost_of_actions(&path).unwrap(), 6.);
    }

    #[test]
    fn breadth_first_returns_two_actions() {
        let ref network = diamond();
        let path = bfs(network).unwrap().unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn uniform_cost_returns_cheapest() {
        let ref network = diamond();
        let outcome = Search::new(network, UniformCost).run().unwrap();
        assert_eq!(
            network.describe(outcome.solution().unwrap()),
            vec!["A->B", "B->D"]
        );
        assert_eq!(outcome.cost, Some(2.));
    }

    #[test]
    fn duplicate_states_expand_once() {
        let network = Network::new(
            &[
                ("A", "B", 1.),
                ("B", "A", 1.),
                ("A", "C", 1.),
                ("C", "A", 1.),
                ("B", "C", 1.),
                ("C", "B", 1.),
            ],
            "A",
            "Z",
        );
        for outcome in [
            Search::new(&network, DepthFirst).run().unwrap(),
            Search::new(&network, BreadthFirst).run().unwrap(),
            Search::new(&network, UniformCost).run().unwrap(),
        ] {
            assert!(!outcome.is_solved());
            assert_eq!(outcome.expanded, 3);
        }
    }

    #[test]
    fn pop_time_closing_keeps_first_arrival() {
        // A* with an inconsistent (but admissible) heuristic:
        // B is popped via the expensive arc before the cheap detour through C
        // reaches it, and the cheaper arrival is dropped.
        let ref network = Network::new(
            &[
                ("A", "B", 4.),
                ("A", "C", 1.),
                ("C", "B", 1.),
                ("B", "D", 3.),
            ],
            "A",
            "D",
        );
        let inconsistent = |state: &Vertex, network: &Network| -> Cost {
            match network.label(*state) {
                "C" => 4.,
                _ => 0.,
            }
        };
        let greedy = astar(network, inconsistent).unwrap().unwrap();
        let cheapest = ucs(network).unwrap().unwrap();
        assert_eq!(network.cost_of_actions(&greedy).unwrap(), 7.);
        assert_eq!(network.cost_of_actions(&cheapest).unwrap(), 5.);
    }

    #[test]
    fn illegal_replay_is_an_error() {
        struct Broken;
        impl Problem for Broken {
            type S = u8;
            type A = u8;
            fn start(&self) -> u8 {
                0
            }
            fn is_goal(&self, state: &u8) -> bool {
                *state == 3
            }
            fn successors(&self, state: &u8) -> Vec<Successor<u8, u8>> {
                vec![(state + 1, 1, 1.)]
            }
            fn cost_of_actions(&self, _: &[u8]) -> anyhow::Result<Cost> {
                anyhow::bail!("no replay")
            }
        }
        assert!(ucs(&Broken).is_err());
        assert!(astar(&Broken, Null).is_err());
        assert_eq!(bfs(&Broken).unwrap(), Some(vec![1, 1, 1]));
    }

    #[test]
    fn breadth_first_is_shortest() {
        for _ in 0..64 {
            let network = Network::random();
            let hops = network.hops();
            match bfs(&network).unwrap() {
                Some(path) => assert_eq!(Some(path.len()), hops),
                None => assert_eq!(hops, None),
            }
        }
    }

    #[test]
    fn null_heuristic_is_uniform_cost() {
        for _ in 0..64 {
            let network = Network::random();
            let a = Search::new(&network, UniformCost).run().unwrap();
            let b = Search::new(&network, AStar(Null)).run().unwrap();
            assert_eq!(a.cost, b.cost);
            assert_eq!(a.path, b.path);
            assert_eq!(a.expanded, b.expanded);
        }
    }

    #[test]
    fn uniform_cost_is_cheapest() {
        for _ in 0..64 {
            let network = Network::random();
            let outcome = Search::new(&network, UniformCost).run().unwrap();
            assert_eq!(outcome.cost, network.distance());
        }
    }

    #[test]
    fn admissible_heuristic_is_never_costlier() {
        for _ in 0..64 {
            let network = Network::random();
            let remaining = network.distances();
            let exact = |state: &Vertex, _: &Network| -> Cost {
                remaining.get(state).copied().unwrap_or(0.)
            };
            let half = |state: &Vertex, _: &Network| -> Cost {
                remaining.get(state).copied().unwrap_or(0.) / 2.
            };
            let cheapest = Search::new(&network, UniformCost).run().unwrap();
            for outcome in [
                Search::new(&network, AStar(exact)).run().unwrap(),
                Search::new(&network, AStar(half)).run().unwrap(),
            ] {
                assert_eq!(outcome.is_solved(), cheapest.is_solved());
                if let (Some(found), Some(best)) = (outcome.cost, cheapest.cost) {
                    assert!(found <= best);
                }
            }
        }
    }

    #[test]
    fn maze_searches_agree_on_length() {
        for _ in 0..16 {
            let ref maze = Maze::random();
            let b = bfs(maze).unwrap();
            let u = ucs(maze).unwrap();
            let a = astar(maze, manhattan).unwrap();
            let d = dfs(maze).unwrap();
            assert_eq!(b.as_ref().map(Vec::len), u.as_ref().map(Vec::len));
            assert_eq!(b.as_ref().map(Vec::len), a.as_ref().map(Vec::len));
            assert_eq!(b.is_some(), d.is_some());
            if let Some(ref path) = d {
                assert!(maze.cost_of_actions(path).is_ok());
            }
        }
    }
}

use crate::*;
use petgraph::algo::dijkstra;
use petgraph::graph::DiGraph;
use petgraph::graph::EdgeIndex;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use rand::Rng;
use std::collections::HashMap;

/// A state of a [`Network`].
pub type Vertex = NodeIndex;
/// An action of a [`Network`]: the arc that was followed.
pub type Link = EdgeIndex;

/// Labelled vertices joined by weighted arcs, with one start and one goal.
///
/// Successors are listed in the order their arcs were added.
#[derive(Debug, Clone)]
pub struct Network {
    graph: DiGraph<String, Cost>,
    start: Vertex,
    goal: Vertex,
}

impl Network {
    /// Build from `(from, to, cost)` arcs. Labels that appear only as the
    /// start or the goal still become (isolated) vertices.
    pub fn new(arcs: &[(&str, &str, Cost)], start: &str, goal: &str) -> Self {
        let mut graph = DiGraph::new();
        let mut labels = HashMap::<String, Vertex>::new();
        let mut intern = |graph: &mut DiGraph<String, Cost>, label: &str| {
            *labels
                .entry(label.to_string())
                .or_insert_with(|| graph.add_node(label.to_string()))
        };
        for (from, to, cost) in arcs {
            let from = intern(&mut graph, from);
            let to = intern(&mut graph, to);
            graph.add_edge(from, to, *cost);
        }
        let start = intern(&mut graph, start);
        let goal = intern(&mut graph, goal);
        Self { graph, start, goal }
    }
    pub fn graph(&self) -> &DiGraph<String, Cost> {
        &self.graph
    }
    pub fn label(&self, vertex: Vertex) -> &str {
        self.graph
            .node_weight(vertex)
            .map(String::as_str)
            .unwrap_or("?")
    }
    /// human-readable `from->to` for each arc
    pub fn describe(&self, links: &[Link]) -> Vec<String> {
        links.iter()
            .filter_map(|arc| self.graph.edge_endpoints(*arc))
            .map(|(from, to)| format!("{}->{}", self.label(from), self.label(to)))
            .collect()
    }
    /// cheapest path cost from start to goal, if the goal is reachable
    pub fn distance(&self) -> Option<Cost> {
        dijkstra(&self.graph, self.start, Some(self.goal), |arc| *arc.weight())
            .get(&self.goal)
            .copied()
    }
    /// fewest arcs from start to goal, if the goal is reachable
    pub fn hops(&self) -> Option<usize> {
        dijkstra(&self.graph, self.start, Some(self.goal), |_| 1usize)
            .get(&self.goal)
            .copied()
    }
    /// cheapest remaining cost to the goal from every vertex that can reach it.
    /// as a heuristic this is exact, hence admissible and consistent.
    pub fn distances(&self) -> HashMap<Vertex, Cost> {
        let mut reversed = self.graph.clone();
        reversed.reverse();
        dijkstra(&reversed, self.goal, None, |arc| *arc.weight())
    }
}

impl Problem for Network {
    type S = Vertex;
    type A = Link;
    fn start(&self) -> Self::S {
        self.start
    }
    fn is_goal(&self, state: &Self::S) -> bool {
        *state == self.goal
    }
    fn successors(&self, state: &Self::S) -> Vec<Successor<Self::S, Self::A>> {
        let mut successors = self
            .graph
            .edges(*state)
            .map(|arc| (arc.target(), arc.id(), *arc.weight()))
            .collect::<Vec<_>>();
        successors.sort_by_key(|(_, arc, _)| *arc);
        successors
    }
    fn cost_of_actions(&self, actions: &[Self::A]) -> anyhow::Result<Cost> {
        let mut vertex = self.start;
        let mut total = 0.;
        for arc in actions {
            let (from, to) = self
                .graph
                .edge_endpoints(*arc)
                .ok_or_else(|| anyhow::anyhow!("unknown arc {:?}", arc))?;
            anyhow::ensure!(
                from == vertex,
                "arc {}->{} played from {}",
                self.label(from),
                self.label(to),
                self.label(vertex)
            );
            total += self.graph[*arc];
            vertex = to;
        }
        Ok(total)
    }
}

impl Arbitrary for Network {
    /// `NETWORK_VERTICES` vertices `v0..`, `NETWORK_ARCS` random arcs with
    /// integral costs in `1..=NETWORK_MAX_COST`, from `v0` to the last vertex.
    /// the goal is not always reachable.
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let labels = (0..NETWORK_VERTICES)
            .map(|i| format!("v{}", i))
            .collect::<Vec<_>>();
        let arcs = (0..NETWORK_ARCS)
            .map(|_| {
                let from = rng.random_range(0..NETWORK_VERTICES);
                let to = rng.random_range(0..NETWORK_VERTICES);
                let cost = rng.random_range(1..=NETWORK_MAX_COST) as Cost;
                (labels[from].as_str(), labels[to].as_str(), cost)
            })
            .collect::<Vec<_>>();
        Self::new(&arcs, &labels[0], &labels[NETWORK_VERTICES - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successors_in_insertion_order() {
        let network = Network::new(&[("A", "B", 1.), ("A", "C", 5.), ("A", "D", 2.)], "A", "D");
        let targets = network
            .successors(&network.start())
            .into_iter()
            .map(|(vertex, _, _)| network.label(vertex).to_string())
            .collect::<Vec<_>>();
        assert_eq!(targets, vec!["B", "C", "D"]);
    }

    #[test]
    fn replay_rejects_disconnected_arcs() {
        let network = Network::new(&[("A", "B", 1.), ("C", "D", 1.)], "A", "D");
        let arcs = network.graph().edge_indices().collect::<Vec<_>>();
        assert_eq!(network.cost_of_actions(&arcs[..1]).unwrap(), 1.);
        assert!(network.cost_of_actions(&arcs).is_err());
        assert_eq!(network.cost_of_actions(&[]).unwrap(), 0.);
    }

    #[test]
    fn isolated_goal_is_a_vertex() {
        let network = Network::new(&[("A", "B", 1.)], "A", "Z");
        assert_eq!(network.graph().node_count(), 3);
        assert_eq!(network.distance(), None);
        assert_eq!(network.hops(), None);
    }
}

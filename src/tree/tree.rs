use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// The arena of one search call.
///
/// A directed graph whose vertices are [`Data`] records and whose edges
/// carry the action that links a parent to its child. Nodes only ever
/// gain one incoming edge, so the graph is a tree rooted at the start
/// state. It is dropped, with every node in it, when the search returns.
#[derive(Debug)]
pub struct Tree<S, A>(DiGraph<Data<S>, A>);

impl<S, A> Default for Tree<S, A> {
    fn default() -> Self {
        Self(DiGraph::with_capacity(0, 0))
    }
}

impl<S, A> Tree<S, A> {
    pub fn at(&self, index: NodeIndex) -> Node<'_, S, A> {
        Node::from((index, &self.0))
    }
    pub fn graph(&self) -> &DiGraph<Data<S>, A> {
        &self.0
    }
    pub fn n(&self) -> usize {
        self.0.node_count()
    }
    /// initial insertion of the root node, at zero cost
    pub fn seed(&mut self, state: S) -> NodeIndex {
        self.0.add_node(Data::from((state, 0.)))
    }
    /// the only way the tree grows: attach a successor of `head`,
    /// accumulating the step cost onto the head's path cost.
    pub fn grow(&mut self, head: NodeIndex, (state, action, step): Successor<S, A>) -> NodeIndex {
        let cost = self.at(head).cost() + step;
        let tail = self.0.add_node(Data::from((state, cost)));
        self.0.add_edge(head, tail, action);
        tail
    }
}

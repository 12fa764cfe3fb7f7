use crate::*;
use petgraph::Direction::Incoming;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// A Node is a wrapper around a NodeIndex and a &Graph.
/// because they are thin wrappers around an index, they're
/// cheap to Copy. holding reference to Graph is useful
/// for navigational methods.
///
/// Like [`Data`], a Node compares and hashes by state only.
pub struct Node<'tree, S, A> {
    index: NodeIndex,
    graph: &'tree DiGraph<Data<S>, A>,
}

impl<'tree, S, A> From<(NodeIndex, &'tree DiGraph<Data<S>, A>)> for Node<'tree, S, A> {
    fn from((index, graph): (NodeIndex, &'tree DiGraph<Data<S>, A>)) -> Self {
        Self { index, graph }
    }
}

impl<'tree, S, A> Node<'tree, S, A> {
    pub fn spawn(&self, index: NodeIndex) -> Node<'tree, S, A> {
        Self::from((index, self.graph))
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn data(&self) -> &'tree Data<S> {
        self.graph
            .node_weight(self.index)
            .expect("node index belongs to its own tree")
    }
    pub fn state(&self) -> &'tree S {
        self.data().state()
    }
    pub fn cost(&self) -> Cost {
        self.data().cost()
    }

    /// navigational methods

    /// the action taken from the parent to reach this node. None at the root.
    pub fn incoming(&self) -> Option<&'tree A> {
        self.graph
            .edges_directed(self.index, Incoming)
            .next()
            .map(|edge| edge.weight())
    }
    pub fn parent(&self) -> Option<Node<'tree, S, A>> {
        self.graph
            .neighbors_directed(self.index, Incoming)
            .next()
            .map(|index| self.spawn(index))
    }
    /// nodes from the root down to and including this one
    pub fn path(&self) -> Vec<Node<'tree, S, A>> {
        let mut path = vec![*self];
        let mut node = *self;
        while let Some(parent) = node.parent() {
            path.push(parent);
            node = parent;
        }
        path.reverse();
        path
    }
    /// actions from the root down to this node, root excluded
    pub fn solution(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.path()
            .iter()
            .filter_map(|node| node.incoming())
            .cloned()
            .collect()
    }
    /// number of actions between the root and this node
    pub fn depth(&self) -> usize {
        self.path().len() - 1
    }
}

impl<S, A> Clone for Node<'_, S, A> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<S, A> Copy for Node<'_, S, A> {}

impl<S: PartialEq, A> PartialEq for Node<'_, S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}
impl<S: Eq, A> Eq for Node<'_, S, A> {}

impl<S: std::hash::Hash, A> std::hash::Hash for Node<'_, S, A> {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.data().hash(hasher);
    }
}

impl<S: std::fmt::Debug, A> std::fmt::Debug for Node<'_, S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Node {:?}>", self.state())
    }
}

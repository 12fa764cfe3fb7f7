use crate::*;
use petgraph::graph::NodeIndex;

/// Exploration order of the graph-search loop.
///
/// A discipline names the frontier it needs and the key a freshly
/// generated node is pushed with. Keys are computed once, at insertion.
pub trait Discipline<P>
where
    P: Problem,
{
    type F: Frontier<NodeIndex>;

    /// Short label for logs and reports.
    fn name(&self) -> &'static str;

    /// Priority of `node` in the frontier. Lower pops first.
    fn key(&self, problem: &P, node: Node<'_, P::S, P::A>) -> anyhow::Result<Cost>;
}

/// Explore one branch to exhaustion before backtracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

/// Explore every node at one depth before the next depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

/// Explore in order of total path cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

/// Explore in order of path cost plus the heuristic estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar<H>(pub H);

impl<P> Discipline<P> for DepthFirst
where
    P: Problem,
{
    type F = Stack<NodeIndex>;
    fn name(&self) -> &'static str {
        "depth-first"
    }
    fn key(&self, _: &P, node: Node<'_, P::S, P::A>) -> anyhow::Result<Cost> {
        Ok(node.cost())
    }
}

impl<P> Discipline<P> for BreadthFirst
where
    P: Problem,
{
    type F = Queue<NodeIndex>;
    fn name(&self) -> &'static str {
        "breadth-first"
    }
    fn key(&self, _: &P, node: Node<'_, P::S, P::A>) -> anyhow::Result<Cost> {
        Ok(node.cost())
    }
}

impl<P> Discipline<P> for UniformCost
where
    P: Problem,
{
    type F = Heap<NodeIndex>;
    fn name(&self) -> &'static str {
        "uniform-cost"
    }
    fn key(&self, problem: &P, node: Node<'_, P::S, P::A>) -> anyhow::Result<Cost> {
        problem.cost_of_actions(&node.solution())
    }
}

impl<P, H> Discipline<P> for AStar<H>
where
    P: Problem,
    H: Heuristic<P>,
{
    type F = Heap<NodeIndex>;
    fn name(&self) -> &'static str {
        "astar"
    }
    fn key(&self, problem: &P, node: Node<'_, P::S, P::A>) -> anyhow::Result<Cost> {
        let g = problem.cost_of_actions(&node.solution())?;
        let h = self.0.estimate(node.state(), problem);
        Ok(g + h)
    }
}

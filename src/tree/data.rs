use crate::*;

/// The record stored for one search node: the state it reached and the
/// cumulative cost of the path that reached it first.
///
/// Equality and hashing look at the state alone. Two records reaching the
/// same state along different paths are the same node as far as duplicate
/// detection is concerned, and `cost` is only a cache for one of those paths.
#[derive(Debug, Clone)]
pub struct Data<S> {
    state: S,
    cost: Cost,
}

impl<S> From<(S, Cost)> for Data<S> {
    fn from((state, cost): (S, Cost)) -> Self {
        Self { state, cost }
    }
}

impl<S> Data<S> {
    pub fn state(&self) -> &S {
        &self.state
    }
    pub fn cost(&self) -> Cost {
        self.cost
    }
}

impl<S: PartialEq> PartialEq for Data<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}
impl<S: Eq> Eq for Data<S> {}

impl<S: std::hash::Hash> std::hash::Hash for Data<S> {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.state.hash(hasher);
    }
}

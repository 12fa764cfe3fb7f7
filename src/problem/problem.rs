use crate::*;

/// A successor triple: the resulting state, the action that reaches it,
/// and the (non-negative) cost of taking that action.
pub type Successor<S, A> = (S, A, Cost);

/// A state space reachable only through an opaque transition function.
///
/// The search engines never look inside a state. Everything they know
/// about the environment comes through these four methods, none of which
/// has a default body: an environment that leaves one out does not compile.
///
/// # Requirements
///
/// - States are compared and hashed for duplicate detection
/// - Step costs are non-negative. This is not checked; a negative cost
///   silently costs uniform-cost and A* their optimality guarantee
/// - `successors` must not mutate anything observable by the caller
pub trait Problem {
    /// Configuration of the environment.
    type S: Clone + Eq + std::hash::Hash + std::fmt::Debug;
    /// Move from one configuration to the next.
    type A: Clone + std::fmt::Debug;

    /// The state every search starts from.
    fn start(&self) -> Self::S;

    /// Whether `state` satisfies the goal test.
    fn is_goal(&self, state: &Self::S) -> bool;

    /// Every state reachable from `state` in one action.
    fn successors(&self, state: &Self::S) -> Vec<Successor<Self::S, Self::A>>;

    /// Total cost of replaying `actions` from the start state.
    /// Fails if the sequence contains a move that is illegal where it is played.
    fn cost_of_actions(&self, actions: &[Self::A]) -> anyhow::Result<Cost>;
}

use crate::*;

/// A turn-based game state with one maximizing agent and any number of
/// adversaries or chance agents.
///
/// Agent 0 is the maximizer. Agents `1..agents()` act after it, in index
/// order; once the last one has acted a ply is complete and agent 0 moves
/// again. The tree is never materialized: the search only ever holds the
/// state it is looking at.
///
/// # Requirements
///
/// - `successor` is pure. It returns a new state and leaves `self` alone
/// - `agents()` is at least 1 and constant across a game
/// - a state that is neither won nor lost gives every agent at least one
///   legal action. An agent stuck with a move pending breaks expectimax
pub trait GameState {
    /// A move by one agent.
    type A: Clone + std::fmt::Debug;

    /// Moves available to `agent` in this state.
    fn legal_actions(&self, agent: Agent) -> Vec<Self::A>;

    /// The state after `agent` plays `action`.
    fn successor(&self, agent: Agent, action: &Self::A) -> Self;

    /// Number of agents taking turns, maximizer included.
    fn agents(&self) -> usize;

    /// The game is over and the maximizer won.
    fn is_win(&self) -> bool;

    /// The game is over and the maximizer lost.
    fn is_lose(&self) -> bool;
}

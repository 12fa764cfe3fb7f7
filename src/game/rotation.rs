use crate::*;

/// Position in the turn order of a bounded game-tree search.
///
/// Tracks the agent to move and the number of complete plies played since
/// the root. Agents move in index order; the ply count goes up when the
/// last agent hands the turn back to the maximizer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Rotation {
    agent: Agent,
    ply: usize,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            agent: MAXIMIZER,
            ply: 0,
        }
    }
}

impl Rotation {
    pub fn agent(&self) -> Agent {
        self.agent
    }
    pub fn ply(&self) -> usize {
        self.ply
    }
    pub fn is_maximizer(&self) -> bool {
        self.agent == MAXIMIZER
    }
    /// the turn after this one, among `agents` agents
    pub fn next(&self, agents: usize) -> Self {
        if self.agent + 1 < agents {
            Self {
                agent: self.agent + 1,
                ply: self.ply,
            }
        } else {
            Self {
                agent: MAXIMIZER,
                ply: self.ply + 1,
            }
        }
    }
    /// the maximizer is back on move with no plies left to spend
    pub fn exhausted(&self, depth: usize) -> bool {
        self.is_maximizer() && self.ply >= depth
    }
}
